//! Ordered markup rewrite rules.
//!
//! Each table is applied top to bottom, and a rule sees the output of every
//! rule before it. The order is part of the behavior.

use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// A single (pattern, replacement) rewrite.
#[derive(Debug, Clone)]
pub struct ConversionRule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

#[derive(Debug, Clone, Copy)]
enum Replacement {
    /// Inserted verbatim.
    Literal(&'static str),
    /// May reference capture groups (`${1}`).
    Template(&'static str),
}

impl ConversionRule {
    /// Rule matching `needle` literally.
    pub fn literal(name: &'static str, needle: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(&regex::escape(needle)).unwrap(),
            replacement: Replacement::Literal(replacement),
        }
    }

    /// Rule matching a regular expression, with a capture-aware replacement.
    ///
    /// Panics on an invalid pattern; rule tables are compiled from constants.
    pub fn pattern(name: &'static str, pattern: &str, template: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement: Replacement::Template(template),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Rewrites every match in `input`.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.replacement {
            Replacement::Literal(text) => self.pattern.replace_all(input, NoExpand(text)),
            Replacement::Template(template) => self.pattern.replace_all(input, template),
        }
    }
}

/// Applies `rules` in declared order.
pub fn apply_rules(input: &str, rules: &[ConversionRule]) -> String {
    let mut result = input.to_string();
    for rule in rules {
        let rewritten = match rule.apply(&result) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        trace!(rule = rule.name, "Rule matched");
        result = rewritten;
    }
    result
}

// ============================================================================
// MathML
// ============================================================================

// The fraction rule opens `\frac{` and closes with `}` but never inserts the
// `}{` between numerator and denominator, so `<mfrac>` output is not valid
// LaTeX. Kept as is until fractions get a real structural pass.
static MATHML_RULES: LazyLock<Vec<ConversionRule>> = LazyLock::new(|| {
    vec![
        ConversionRule::literal("msup-open", "<msup>", "^{"),
        ConversionRule::literal("msup-close", "</msup>", "}"),
        ConversionRule::literal("msub-open", "<msub>", "_{"),
        ConversionRule::literal("msub-close", "</msub>", "}"),
        ConversionRule::literal("mfrac-open", "<mfrac>", "\\frac{"),
        ConversionRule::literal("mfrac-close", "</mfrac>", "}"),
        ConversionRule::literal("mi-pi", "<mi>π</mi>", "\\pi"),
    ]
});

/// MathML element rewrites, in application order.
pub fn mathml_rules() -> &'static [ConversionRule] {
    &MATHML_RULES
}

// ============================================================================
// HTML
// ============================================================================

static HTML_RULES: LazyLock<Vec<ConversionRule>> = LazyLock::new(|| {
    vec![
        ConversionRule::pattern("sup", r"<sup>(.*?)</sup>", "^{${1}}"),
        ConversionRule::pattern("sub", r"<sub>(.*?)</sub>", "_{${1}}"),
        // Subscripts in HTML copied out of some PDF viewers arrive as this
        // exact span. Anything styled differently is not recognized.
        ConversionRule::pattern(
            "pdf-span-subscript",
            r#"<span class="s1" style="font: 7px Helvetica;">(.*?)</span>"#,
            "_{${1}}",
        ),
    ]
});

/// HTML rewrites, in application order.
pub fn html_rules() -> &'static [ConversionRule] {
    &HTML_RULES
}

// ============================================================================
// Tag stripping
// ============================================================================

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Removes every `<...>` tag, keeping the text between tags.
pub fn strip_tags(input: &str) -> String {
    RE_TAG.replace_all(input, "").into_owned()
}
