//! Symbolic name assignment for extracted colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Case convention applied to generated symbol names.
///
/// Conversion operates on an already-split word sequence, so word boundaries
/// (including the trailing index number) are never re-derived from the joined
/// string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseConvention {
    /// `brand-color-1`
    #[default]
    Dash,
    /// `brand_color_1`
    Snake,
    /// `brandColor1`
    Camel,
    /// `BrandColor1`
    Pascal,
}

impl CaseConvention {
    /// Joins `words` according to this convention.
    pub fn apply(self, words: &[&str]) -> String {
        match self {
            CaseConvention::Dash => words.join("-"),
            CaseConvention::Snake => words.join("_"),
            CaseConvention::Camel => {
                let mut out = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        out.push_str(word);
                    } else {
                        push_capitalized(&mut out, word);
                    }
                }
                out
            }
            CaseConvention::Pascal => {
                let mut out = String::new();
                for word in words {
                    push_capitalized(&mut out, word);
                }
                out
            }
        }
    }

    fn name(self) -> &'static str {
        match self {
            CaseConvention::Dash => "dash",
            CaseConvention::Snake => "snake",
            CaseConvention::Camel => "camel",
            CaseConvention::Pascal => "pascal",
        }
    }
}

impl fmt::Display for CaseConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "dash" => Ok(CaseConvention::Dash),
            "snake" => Ok(CaseConvention::Snake),
            "camel" => Ok(CaseConvention::Camel),
            "pascal" => Ok(CaseConvention::Pascal),
            _ => Err(Error::Validation {
                field: "type_case",
                message: format!("unknown naming convention: '{}'", s),
            }),
        }
    }
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Assigns symbolic names to distinct colors in first-seen order.
///
/// Names are built from the configured prefix words, the base word `color`,
/// and a 1-based index, rendered through the case convention. The index makes
/// every name unique within a run, and the same ordered input always yields
/// the same names.
#[derive(Debug, Clone)]
pub struct NameAssigner {
    case: CaseConvention,
    prefix_words: Vec<String>,
}

impl NameAssigner {
    /// Creates an assigner with the given convention and optional prefix.
    ///
    /// The prefix splits into words on any non-alphanumeric character, so
    /// `my-brand`, `my_brand`, and `my brand` yield the same words.
    pub fn new(case: CaseConvention, prefix: &str) -> Self {
        let prefix_words = prefix
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self { case, prefix_words }
    }

    /// The name for the `index`-th distinct color (1-based).
    pub fn name(&self, index: usize) -> String {
        let index = index.to_string();
        let mut words: Vec<&str> = self.prefix_words.iter().map(String::as_str).collect();
        words.push("color");
        words.push(&index);
        self.case.apply(&words)
    }
}
