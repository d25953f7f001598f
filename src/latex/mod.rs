//! Best-effort conversion of clipboard content to LaTeX math.
//!
//! Exactly one representation of a bundle is converted, chosen by richness:
//! MathML, then HTML, then plain text. Each path is a fixed sequence of
//! regex rewrites followed by a Unicode symbol pass; there is no parsing and
//! no validation of the produced LaTeX.
//!
//! Known blind spots:
//! - `<mfrac>` gets `\frac{` but no `}{` between numerator and denominator.
//! - HTML subscripts are only recognized as `<sub>` or one exact PDF-export span.
//! - LaTeX special characters in the text are not escaped.

pub mod rules;
pub mod symbols;

use tracing::debug;

use crate::bundle::{ClipboardBundle, Representation};

pub use rules::{apply_rules, html_rules, mathml_rules, strip_tags, ConversionRule};
pub use symbols::{substitute_symbols, SymbolTable};

/// Converts the richest representation in `bundle` to a LaTeX fragment.
///
/// The result is not wrapped in `$` delimiters; see
/// [`crate::paste::wrap_inline_math`].
///
/// # Example
///
/// ```
/// use pastex::{convert_to_latex, ClipboardBundle};
///
/// let bundle = ClipboardBundle::text_only("x2").with_html("x<sup>2</sup>");
/// assert_eq!(convert_to_latex(&bundle), "x^{2}");
/// ```
pub fn convert_to_latex(bundle: &ClipboardBundle) -> String {
    let (representation, content) = bundle.preferred();
    debug!(%representation, bytes = content.len(), "Converting clipboard to LaTeX");

    match representation {
        Representation::MathMl => convert_mathml_to_latex(content),
        Representation::Html => convert_html_to_latex(content),
        Representation::PlainText => convert_text_to_latex(content),
    }
}

/// MathML path: element rewrites, tag stripping, symbol substitution.
pub fn convert_mathml_to_latex(math_ml: &str) -> String {
    let rewritten = apply_rules(math_ml, mathml_rules());
    substitute_symbols(&strip_tags(&rewritten))
}

/// HTML path: `<sup>`/`<sub>` rewrites, tag stripping, symbol substitution.
pub fn convert_html_to_latex(html: &str) -> String {
    let rewritten = apply_rules(html, html_rules());
    substitute_symbols(&strip_tags(&rewritten))
}

/// Plain-text path: symbol substitution only.
pub fn convert_text_to_latex(text: &str) -> String {
    substitute_symbols(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mathml_wins_over_html() {
        let bundle = ClipboardBundle::text_only("ignored text")
            .with_html("<b>ignored html</b>")
            .with_math_ml("<mi>y</mi>");
        assert_eq!(convert_to_latex(&bundle), "y");
    }

    #[test]
    fn test_html_wins_over_text() {
        let bundle = ClipboardBundle::text_only("x2").with_html("x<sub>2</sub>");
        assert_eq!(convert_to_latex(&bundle), "x_{2}");
    }

    #[test]
    fn test_msup_rules_wrap_content() {
        // Braces come from the tag positions, so the base ends up inside them
        let bundle = ClipboardBundle::new().with_math_ml("<msup>x</msup>");
        assert_eq!(convert_to_latex(&bundle), "^{x}");
    }

    #[test]
    fn test_mathml_superscript_structure() {
        let math_ml = "<math><msup><mi>x</mi><mn>2</mn></msup></math>";
        assert_eq!(convert_mathml_to_latex(math_ml), "^{x2}");
    }

    #[test]
    fn test_mathml_subscript() {
        let math_ml = "<msub><mi>a</mi><mi>i</mi></msub>";
        assert_eq!(convert_mathml_to_latex(math_ml), "_{ai}");
    }

    #[test]
    fn test_mathml_fraction_is_incomplete() {
        // No `}{` separator: current behavior, not a valid \frac
        let math_ml = "<mfrac><mn>1</mn><mn>2</mn></mfrac>";
        assert_eq!(convert_mathml_to_latex(math_ml), "\\frac{12}");
    }

    #[test]
    fn test_mathml_pi_rule_and_symbol_pass() {
        assert_eq!(convert_mathml_to_latex("<mi>π</mi><mi>r</mi>"), "\\pir");
        // π outside the exact <mi> pair is caught by the symbol pass instead
        assert_eq!(
            convert_mathml_to_latex("<mi mathvariant=\"normal\">π</mi>"),
            "\\pi "
        );
        assert_eq!(convert_mathml_to_latex("<mo>≤</mo>"), "\\leq ");
    }

    #[test]
    fn test_html_sup_sub() {
        assert_eq!(convert_html_to_latex("E = mc<sup>2</sup>"), "E = mc^{2}");
        assert_eq!(convert_html_to_latex("H<sub>2</sub>O"), "H_{2}O");
    }

    #[test]
    fn test_html_pdf_span_subscript() {
        // Heuristic tied to one PDF export signature; may misfire on look-alikes
        let html = r#"<span class="s1" style="font: 7px Helvetica;">2</span>"#;
        assert_eq!(convert_html_to_latex(html), "_{2}");
    }

    #[test]
    fn test_html_other_span_only_stripped() {
        let other_class = r#"<span class="s2" style="font: 7px Helvetica;">2</span>"#;
        assert_eq!(convert_html_to_latex(other_class), "2");

        let other_style = r#"<span class="s1" style="font: 12px Helvetica;">2</span>"#;
        assert_eq!(convert_html_to_latex(other_style), "2");
    }

    #[test]
    fn test_html_strips_tags_and_substitutes() {
        let html = "<p><i>x</i> ∈ <b>A</b></p>";
        assert_eq!(convert_html_to_latex(html), "x \\in  A");
    }

    #[test]
    fn test_html_nested_sup_keeps_inner_tags_until_strip() {
        assert_eq!(convert_html_to_latex("e<sup><i>x</i></sup>"), "e^{x}");
    }

    #[test]
    fn test_plain_text_ascii_caret_untouched() {
        let bundle = ClipboardBundle::text_only("x^2");
        assert_eq!(convert_to_latex(&bundle), "x^2");
    }

    #[test]
    fn test_plain_text_keeps_angle_brackets() {
        // Tags are only stripped on the markup paths
        assert_eq!(convert_text_to_latex("a<b>c"), "a<b>c");
    }

    #[test]
    fn test_plain_text_symbols() {
        assert_eq!(convert_text_to_latex("A = πr²"), "A = \\pi r^{2} ");
    }

    #[test]
    fn test_empty_bundle() {
        assert_eq!(convert_to_latex(&ClipboardBundle::new()), "");
        assert_eq!(convert_to_latex(&ClipboardBundle::text_only("")), "");
    }

    #[test]
    fn test_empty_mathml_is_still_selected() {
        let bundle = ClipboardBundle::text_only("π").with_math_ml("");
        assert_eq!(convert_to_latex(&bundle), "");
    }

    #[test]
    fn test_special_characters_not_escaped() {
        assert_eq!(convert_text_to_latex("100% & more_"), "100% & more_");
    }
}
