//! Hex color literal scanning and canonicalization.
//!
//! [`scan`] walks source text and yields every hex color occurrence in
//! document order, each carrying its exact byte span and raw text. The
//! supported forms are `#rgb`, `#rgba`, `#rrggbb`, and `#rrggbbaa`,
//! case-insensitive.
//!
//! Every raw occurrence is reported; deduplication by canonical value is the
//! caller's concern.
//!
//! # Example
//!
//! ```rust
//! use declarehex::scanner::scan;
//!
//! let css = ".a { color: #FFF; border-color: #ffffff; }";
//! let found: Vec<_> = scan(css).collect();
//! assert_eq!(found.len(), 2);
//! assert_eq!(found[0].raw(), "#FFF");
//! assert_eq!(found[0].canonical(), found[1].canonical());
//! ```

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `#` followed by a maximal run of hex digits. The run length is
/// validated afterwards: the regex crate has no lookahead, and a maximal run
/// whose length is not 3, 4, 6, or 8 is exactly a literal that is either too
/// short or immediately followed by another hex digit.
static HEX_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new("#[0-9a-fA-F]+").expect("hex run pattern is valid"));

/// A single hex color occurrence in scanned source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor<'a> {
    raw: &'a str,
    start: usize,
}

impl<'a> HexColor<'a> {
    /// The literal as written, including the `#`.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Byte range of the literal within the scanned text.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.raw.len()
    }

    /// Canonical form of the literal. See [`canonicalize`].
    pub fn canonical(&self) -> String {
        canonicalize(self.raw)
    }
}

/// Scans `source` for hex color literals in document order.
///
/// The returned iterator is lazy and borrows `source`; a fresh scan is
/// required for each new text.
pub fn scan(source: &str) -> impl Iterator<Item = HexColor<'_>> {
    HEX_RUN.find_iter(source).filter_map(|m| {
        let digits = m.as_str().len() - 1;
        matches!(digits, 3 | 4 | 6 | 8).then(|| HexColor {
            raw: m.as_str(),
            start: m.start(),
        })
    })
}

/// Normalizes a hex literal to its canonical form: lowercase, with 3- and
/// 4-digit shorthands expanded to 6 or 8 digits, so `#AbC` and `#aabbcc`
/// compare equal.
///
/// Canonicalization is a pure function of the literal; two literals
/// canonicalize equal iff they denote the same color value.
pub fn canonicalize(raw: &str) -> String {
    let digits = &raw[1..];
    let mut canonical = String::with_capacity(1 + digits.len() * 2);
    canonical.push('#');

    match digits.len() {
        3 | 4 => {
            for c in digits.chars() {
                let c = c.to_ascii_lowercase();
                canonical.push(c);
                canonical.push(c);
            }
        }
        _ => {
            for c in digits.chars() {
                canonical.push(c.to_ascii_lowercase());
            }
        }
    }

    canonical
}
