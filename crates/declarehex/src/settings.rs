//! Per-invocation engine configuration.
//!
//! [`Settings`] mirrors the caller-facing settings object: every field has a
//! default, so an empty `{}` deserializes to the vanilla-CSS configuration.
//! The enum fields reject out-of-set values at parse time rather than
//! falling back to a default.
//!
//! Settings are constructed once per call and consumed read-only; nothing is
//! cached or mutated across invocations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::name::CaseConvention;

/// Target preprocessor dialect.
///
/// Selecting a dialect switches the output from CSS custom properties to the
/// dialect's variable syntax. Each dialect has a fixed sigil used both in
/// declarations and at reference sites; the table is closed, and a name
/// outside it fails with [`Error::UnsupportedDialect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Scss,
    Sass,
    Less,
    Stylus,
}

impl Dialect {
    /// All recognized dialects.
    pub const ALL: [Dialect; 4] = [Dialect::Scss, Dialect::Sass, Dialect::Less, Dialect::Stylus];

    /// The variable sigil for this dialect.
    ///
    /// Stylus variables are bare identifiers, so its sigil is empty.
    pub fn sigil(self) -> &'static str {
        match self {
            Dialect::Scss | Dialect::Sass => "$",
            Dialect::Less => "@",
            Dialect::Stylus => "",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Dialect::Scss => "scss",
            Dialect::Sass => "sass",
            Dialect::Less => "less",
            Dialect::Stylus => "stylus",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "scss" => Ok(Dialect::Scss),
            "sass" => Ok(Dialect::Sass),
            "less" => Ok(Dialect::Less),
            "stylus" => Ok(Dialect::Stylus),
            _ => Err(Error::UnsupportedDialect(s.to_string())),
        }
    }
}

/// Immutable configuration for one engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target preprocessor, or `None` for vanilla CSS custom properties.
    pub css_preprocessor: Option<Dialect>,

    /// Case convention applied to generated symbol names.
    pub type_case: CaseConvention,

    /// Prepended to each generated base name before case conversion.
    pub color_name_prefix: String,

    /// Target ruleset selector for vanilla mode.
    pub css_selector: String,

    /// Indent generated declaration lines with one tab instead of two spaces.
    pub use_tabs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            css_preprocessor: None,
            type_case: CaseConvention::Dash,
            color_name_prefix: String::new(),
            css_selector: ":root".to_string(),
            use_tabs: false,
        }
    }
}
