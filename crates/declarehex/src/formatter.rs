//! Declaration formatting and the rewrite pipeline.
//!
//! The two formatter variants share one orchestration routine:
//!
//! 1. Scan the content for hex color occurrences.
//! 2. Collect the distinct canonical colors in first-seen order and assign
//!    names.
//! 3. Rewrite every occurrence span with the variant's reference expression.
//! 4. Attach the variant's declarations block.
//!
//! Substitution is span-based over the original text, never a second regex
//! scan, so the hex values inside the freshly built declarations block are
//! never touched.

use std::collections::HashMap;

use crate::error::Result;
use crate::name::NameAssigner;
use crate::ruleset::RulesetLocator;
use crate::scanner;
use crate::settings::{Dialect, Settings};

/// A distinct color with its assigned name.
///
/// `value` is the first-seen raw literal, which is what the declaration
/// carries; `canonical` is the dedup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    pub canonical: String,
    pub value: String,
    pub name: String,
}

/// Dialect-specific rendering seam shared by the two formatter variants.
trait DialectFormat {
    /// Renders the declaration line for a name/value pair.
    fn declaration(&self, name: &str, value: &str) -> String;

    /// Renders the reference expression used at a substitution site.
    fn reference(&self, name: &str) -> String;

    /// Attaches the declarations block to the rewritten stylesheet.
    fn attach(&self, declarations: &[String], rewritten: String) -> String;
}

/// Rewrites stylesheets into CSS custom properties on a target selector.
pub struct VanillaCss {
    assigner: NameAssigner,
    locator: RulesetLocator,
}

impl VanillaCss {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            assigner: NameAssigner::new(settings.type_case, &settings.color_name_prefix),
            locator: RulesetLocator::new(&settings.css_selector, settings.use_tabs)?,
        })
    }

    /// Extracts hex colors and declares them as custom properties in a new
    /// ruleset at the top of the file.
    pub fn declare_hexcodes(&self, content: &str) -> String {
        declare(self, &self.assigner, content)
    }
}

impl DialectFormat for VanillaCss {
    fn declaration(&self, name: &str, value: &str) -> String {
        format!("--{}: {};", name, value)
    }

    fn reference(&self, name: &str) -> String {
        format!("var(--{})", name)
    }

    fn attach(&self, declarations: &[String], rewritten: String) -> String {
        // Cleanup runs before the new block is attached, so a pre-existing
        // empty ruleset collapses away while the generated one survives.
        let cleaned = self.locator.remove_empty(&rewritten);
        let mut out = self.locator.create(declarations);
        out.push_str(&cleaned);
        out
    }
}

/// Rewrites stylesheets into preprocessor variables.
pub struct PreprocessorCss {
    assigner: NameAssigner,
    dialect: Dialect,
}

impl PreprocessorCss {
    pub fn new(dialect: Dialect, settings: &Settings) -> Self {
        Self {
            assigner: NameAssigner::new(settings.type_case, &settings.color_name_prefix),
            dialect,
        }
    }

    /// Extracts hex colors and declares them as top-level variable
    /// assignments, no enclosing ruleset.
    pub fn declare_hexcodes(&self, content: &str) -> String {
        declare(self, &self.assigner, content)
    }
}

impl DialectFormat for PreprocessorCss {
    fn declaration(&self, name: &str, value: &str) -> String {
        format!("{}{}: {};", self.dialect.sigil(), name, value)
    }

    fn reference(&self, name: &str) -> String {
        format!("{}{}", self.dialect.sigil(), name)
    }

    fn attach(&self, declarations: &[String], rewritten: String) -> String {
        let mut out = declarations.join("\n");
        out.push_str("\n\n");
        out.push_str(&rewritten);
        out
    }
}

/// Rewrites `content` according to `settings`: every hex color literal is
/// replaced by a variable reference, and a block declaring the variables is
/// inserted. Returns `content` unchanged when it holds no hex literal.
///
/// This is the engine entry point; it selects the formatter variant from the
/// dialect setting and delegates.
///
/// # Example
///
/// ```rust
/// use declarehex::{declare_hexcodes, Settings};
///
/// let output = declare_hexcodes("body { color: #FFF; }", &Settings::default()).unwrap();
/// assert_eq!(
///     output,
///     ":root {\n  --color-1: #FFF;\n}\n\nbody { color: var(--color-1); }"
/// );
/// ```
pub fn declare_hexcodes(content: &str, settings: &Settings) -> Result<String> {
    match settings.css_preprocessor {
        Some(dialect) => Ok(PreprocessorCss::new(dialect, settings).declare_hexcodes(content)),
        None => Ok(VanillaCss::new(settings)?.declare_hexcodes(content)),
    }
}

/// Shared scan, name, substitute, attach pipeline.
fn declare<F: DialectFormat>(format: &F, assigner: &NameAssigner, content: &str) -> String {
    let occurrences: Vec<_> = scanner::scan(content).collect();
    if occurrences.is_empty() {
        return content.to_string();
    }

    // Distinct canonical colors in first-seen order. Within one run this is
    // a bijection: every distinct color gets exactly one name.
    let mut names: HashMap<String, String> = HashMap::new();
    let mut colors: Vec<NamedColor> = Vec::new();
    for occurrence in &occurrences {
        let canonical = occurrence.canonical();
        if !names.contains_key(&canonical) {
            let name = assigner.name(colors.len() + 1);
            names.insert(canonical.clone(), name.clone());
            colors.push(NamedColor {
                canonical,
                value: occurrence.raw().to_string(),
                name,
            });
        }
    }

    // Span-based substitution over the original text.
    let mut rewritten = String::with_capacity(content.len());
    let mut last = 0;
    for occurrence in &occurrences {
        let span = occurrence.span();
        rewritten.push_str(&content[last..span.start]);
        if let Some(name) = names.get(&occurrence.canonical()) {
            rewritten.push_str(&format.reference(name));
        }
        last = span.end;
    }
    rewritten.push_str(&content[last..]);

    let declarations: Vec<String> = colors
        .iter()
        .map(|color| format.declaration(&color.name, &color.value))
        .collect();

    format.attach(&declarations, rewritten)
}
