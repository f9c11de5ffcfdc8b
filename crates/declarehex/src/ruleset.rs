//! Ruleset location, removal, and synthesis for one selector.
//!
//! Matching is regex-based and deliberately shallow: a ruleset body is the
//! shortest span up to the first `}`, so nested rule blocks inside the
//! tracked selector are not supported. Generalizing this to brace-aware
//! parsing would change the engine's contract and is out of scope.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// Locates, removes, and synthesizes `selector { ... }` rulesets.
///
/// A located span covers the selector, its brace-delimited body, and up to
/// three trailing newlines, so removal does not leave blank gaps behind.
#[derive(Debug)]
pub struct RulesetLocator {
    selector: String,
    use_tabs: bool,
    pattern: Regex,
}

impl RulesetLocator {
    /// Compiles the search pattern for `selector`.
    ///
    /// The selector text is escaped before compilation, so selector
    /// metacharacters (`.`, `*`, `[` ...) match literally.
    pub fn new(selector: &str, use_tabs: bool) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(
            r"{}\s*\{{(?P<declarations>[\s\S]*?)\}}\n{{0,3}}",
            regex::escape(selector)
        ))
        .case_insensitive(true)
        .build()?;

        Ok(Self {
            selector: selector.to_string(),
            use_tabs,
            pattern,
        })
    }

    /// The selector this locator tracks.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Returns every non-overlapping ruleset match as a whole-match string,
    /// in document order. Matching is case-insensitive.
    pub fn find_all<'a>(&self, css: &'a str) -> Vec<&'a str> {
        self.pattern.find_iter(css).map(|m| m.as_str()).collect()
    }

    /// Deletes every matched ruleset whose body is whitespace-only, trailing
    /// blank lines included, and returns the modified text.
    pub fn remove_empty(&self, css: &str) -> String {
        let mut out = String::with_capacity(css.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(css) {
            let Some(whole) = caps.get(0) else { continue };
            let declarations = &caps["declarations"];

            if declarations.split_whitespace().next().is_none() {
                out.push_str(&css[last..whole.start()]);
                last = whole.end();
            }
        }

        out.push_str(&css[last..]);
        out
    }

    /// Renders a new ruleset holding `declarations`, one per line, indented
    /// by one tab or two spaces, followed by one blank line.
    pub fn create(&self, declarations: &[String]) -> String {
        let spacing = if self.use_tabs { "\t" } else { "  " };
        let mut out = String::new();

        out.push_str(&self.selector);
        out.push_str(" {\n");
        for declaration in declarations {
            out.push_str(spacing);
            out.push_str(declaration);
            out.push('\n');
        }
        out.push_str("}\n\n");
        out
    }
}
