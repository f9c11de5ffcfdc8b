//! Hex color extraction and variable declaration for stylesheets.
//!
//! Given raw CSS (or a preprocessor dialect) source text, the engine locates
//! every hex color literal, deduplicates them by canonical value, assigns
//! each distinct color a stable symbolic name, emits a declarations block
//! defining those names as variables in the target dialect, and rewrites all
//! in-place occurrences with a reference to the variable.
//!
//! # Example
//!
//! ```rust
//! use declarehex::{declare_hexcodes, Dialect, Settings};
//!
//! // Vanilla CSS: custom properties on `:root`.
//! let output = declare_hexcodes("body { color: #FFF; }", &Settings::default()).unwrap();
//! assert_eq!(
//!     output,
//!     ":root {\n  --color-1: #FFF;\n}\n\nbody { color: var(--color-1); }"
//! );
//!
//! // SCSS: sigil-prefixed top-level assignments.
//! let settings = Settings {
//!     css_preprocessor: Some(Dialect::Scss),
//!     ..Settings::default()
//! };
//! let output = declare_hexcodes(".a { color: #123456; }", &settings).unwrap();
//! assert_eq!(output, "$color-1: #123456;\n\n.a { color: $color-1; }");
//! ```
//!
//! # Scope
//!
//! The engine works at the level of pattern matching and ruleset text spans,
//! not a CSS grammar: ruleset bodies are matched up to the first `}` (nested
//! blocks inside the tracked selector are not supported), and no semantic
//! color equivalence is applied (`#fff` and `white` stay distinct).
//!
//! The transformation is pure and synchronous. Every value is scoped to one
//! [`declare_hexcodes`] call; concurrent invocations share nothing mutable.

pub mod error;
pub mod formatter;
pub mod name;
pub mod ruleset;
pub mod scanner;
pub mod settings;

pub use error::{Error, Result};
pub use formatter::{declare_hexcodes, NamedColor, PreprocessorCss, VanillaCss};
pub use name::{CaseConvention, NameAssigner};
pub use ruleset::RulesetLocator;
pub use scanner::{canonicalize, scan, HexColor};
pub use settings::{Dialect, Settings};
