//! Property-based tests for the engine's pure functions.

use proptest::prelude::*;

use declarehex::{canonicalize, declare_hexcodes, scan, CaseConvention, NameAssigner, Settings};

// ============================================================================
// Strategies
// ============================================================================

/// A hex color literal in any supported form.
fn hex_literal() -> impl Strategy<Value = String> {
    (prop::sample::select(vec![3usize, 4, 6, 8])).prop_flat_map(|len| {
        prop::collection::vec(prop::sample::select("0123456789abcdefABCDEF".chars().collect::<Vec<_>>()), len)
            .prop_map(|digits| {
                let mut literal = String::from("#");
                literal.extend(digits);
                literal
            })
    })
}

/// Stylesheet-ish filler with no `#` at all.
fn hashless_text() -> impl Strategy<Value = String> {
    "[a-z .:;{}\\-\n]{0,80}"
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Canonicalization is idempotent: a canonical form canonicalizes to
    /// itself.
    #[test]
    fn canonical_form_is_a_fixed_point(literal in hex_literal()) {
        let canonical = canonicalize(&literal);
        prop_assert_eq!(canonicalize(&canonical), canonical);
    }

    /// Canonical forms are always lowercase and 6 or 8 digits long.
    #[test]
    fn canonical_form_shape(literal in hex_literal()) {
        let canonical = canonicalize(&literal);
        prop_assert!(canonical.starts_with('#'));
        prop_assert!(matches!(canonical.len() - 1, 6 | 8));
        prop_assert_eq!(canonical.to_lowercase(), canonical.clone());
    }

    /// Shorthand and its expansion share one canonical value.
    #[test]
    fn shorthand_matches_expansion(digits in prop::collection::vec(
        prop::sample::select("0123456789abcdef".chars().collect::<Vec<_>>()), 3))
    {
        let short: String = std::iter::once('#').chain(digits.iter().copied()).collect();
        let long: String = std::iter::once('#')
            .chain(digits.iter().flat_map(|&c| [c, c]))
            .collect();
        prop_assert_eq!(canonicalize(&short), canonicalize(&long));
    }

    /// Every scanned span slices back to its raw text.
    #[test]
    fn scan_spans_are_exact(parts in prop::collection::vec((hashless_text(), hex_literal()), 0..6)) {
        let mut source = String::new();
        for (filler, literal) in &parts {
            source.push_str(filler);
            source.push_str(literal);
            source.push(' ');
        }

        for color in scan(&source) {
            prop_assert_eq!(&source[color.span()], color.raw());
        }
    }

    /// The scanner finds one occurrence per embedded literal when each is
    /// delimited by non-hex text.
    #[test]
    fn scan_finds_each_delimited_literal(literals in prop::collection::vec(hex_literal(), 0..6)) {
        let source: String = literals
            .iter()
            .map(|l| format!(".x {{ color: {}; }}\n", l))
            .collect();
        prop_assert_eq!(scan(&source).count(), literals.len());
    }

    /// Content without `#` always passes through unchanged, in every mode.
    #[test]
    fn hashless_content_is_passthrough(content in hashless_text()) {
        let output = declare_hexcodes(&content, &Settings::default()).unwrap();
        prop_assert_eq!(output, content);
    }

    /// Name assignment is injective over indices.
    #[test]
    fn names_are_distinct_per_index(count in 1usize..40) {
        let assigner = NameAssigner::new(CaseConvention::Dash, "");
        let names: Vec<String> = (1..=count).map(|i| assigner.name(i)).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), names.len());
    }

    /// Running the engine is deterministic.
    #[test]
    fn engine_is_deterministic(parts in prop::collection::vec((hashless_text(), hex_literal()), 0..5)) {
        let mut source = String::new();
        for (filler, literal) in &parts {
            source.push_str(filler);
            source.push_str(literal);
            source.push(';');
        }

        let settings = Settings::default();
        let first = declare_hexcodes(&source, &settings).unwrap();
        let second = declare_hexcodes(&source, &settings).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The number of generated declarations equals the number of distinct
    /// canonical colors.
    #[test]
    fn one_declaration_per_distinct_color(literals in prop::collection::vec(hex_literal(), 1..8)) {
        let source: String = literals
            .iter()
            .map(|l| format!(".x {{ color: {}; }}\n", l))
            .collect();

        let mut canonicals: Vec<String> = literals.iter().map(|l| canonicalize(l)).collect();
        canonicals.sort();
        canonicals.dedup();

        let output = declare_hexcodes(&source, &Settings::default()).unwrap();
        let declared = output
            .lines()
            .filter(|line| line.trim_start().starts_with("--color-"))
            .count();
        prop_assert_eq!(declared, canonicals.len());
    }
}
