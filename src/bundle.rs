//! Clipboard bundle model.
//!
//! A bundle holds every representation one clipboard read offered. Absence of
//! a representation (`None`) means the source did not offer it; an offered but
//! empty payload is `Some("")`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME type of the plain-text representation.
pub const MIME_TEXT_PLAIN: &str = "text/plain";
/// MIME type of the HTML representation.
pub const MIME_TEXT_HTML: &str = "text/html";
/// MIME type of the MathML representation.
pub const MIME_MATHML: &str = "application/mathml+xml";

/// Representations available from a single clipboard read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardBundle {
    /// Plain text. Always present, may be empty.
    #[serde(default)]
    pub text: String,

    /// HTML fragment, if offered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// MathML markup, if offered.
    #[serde(
        default,
        rename = "mathML",
        alias = "mathml",
        skip_serializing_if = "Option::is_none"
    )]
    pub math_ml: Option<String>,
}

impl ClipboardBundle {
    /// Creates an empty bundle (empty text, nothing else offered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle carrying only plain text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: None,
            math_ml: None,
        }
    }

    /// Attaches an HTML representation.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Attaches a MathML representation.
    pub fn with_math_ml(mut self, math_ml: impl Into<String>) -> Self {
        self.math_ml = Some(math_ml.into());
        self
    }

    /// Builds a bundle from MIME-typed clipboard parts.
    ///
    /// Unknown types are ignored. When the same type appears more than once,
    /// the last part wins.
    ///
    /// # Example
    ///
    /// ```
    /// use pastex::bundle::{ClipboardBundle, MIME_TEXT_HTML, MIME_TEXT_PLAIN};
    ///
    /// let bundle = ClipboardBundle::from_mime_parts([
    ///     (MIME_TEXT_PLAIN, "x2"),
    ///     (MIME_TEXT_HTML, "x<sup>2</sup>"),
    ///     ("image/png", "..."),
    /// ]);
    /// assert_eq!(bundle.text, "x2");
    /// assert_eq!(bundle.html.as_deref(), Some("x<sup>2</sup>"));
    /// assert!(bundle.math_ml.is_none());
    /// ```
    pub fn from_mime_parts<I, M, C>(parts: I) -> Self
    where
        I: IntoIterator<Item = (M, C)>,
        M: AsRef<str>,
        C: Into<String>,
    {
        let mut bundle = Self::new();
        for (mime, content) in parts {
            match mime.as_ref() {
                MIME_TEXT_PLAIN => bundle.text = content.into(),
                MIME_TEXT_HTML => bundle.html = Some(content.into()),
                MIME_MATHML => bundle.math_ml = Some(content.into()),
                _ => {}
            }
        }
        bundle
    }

    /// Returns true if no representation carries any content.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.html.as_deref().is_none_or(str::is_empty)
            && self.math_ml.as_deref().is_none_or(str::is_empty)
    }

    /// Selects the richest offered representation: MathML, then HTML, then plain text.
    pub fn preferred(&self) -> (Representation, &str) {
        if let Some(math_ml) = &self.math_ml {
            (Representation::MathMl, math_ml)
        } else if let Some(html) = &self.html {
            (Representation::Html, html)
        } else {
            (Representation::PlainText, &self.text)
        }
    }
}

/// Clipboard representation kinds, richest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    MathMl,
    Html,
    PlainText,
}

impl Representation {
    /// MIME type this representation is read from.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::MathMl => MIME_MATHML,
            Self::Html => MIME_TEXT_HTML,
            Self::PlainText => MIME_TEXT_PLAIN,
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MathMl => "mathml",
            Self::Html => "html",
            Self::PlainText => "text",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_priority() {
        let text = ClipboardBundle::text_only("t");
        assert_eq!(text.preferred(), (Representation::PlainText, "t"));

        let html = text.clone().with_html("<b>h</b>");
        assert_eq!(html.preferred(), (Representation::Html, "<b>h</b>"));

        let math = html.with_math_ml("<mi>m</mi>");
        assert_eq!(math.preferred(), (Representation::MathMl, "<mi>m</mi>"));
    }

    #[test]
    fn test_present_but_empty_still_preferred() {
        let bundle = ClipboardBundle::text_only("fallback").with_html("");
        assert_eq!(bundle.preferred(), (Representation::Html, ""));
    }

    #[test]
    fn test_from_mime_parts_last_wins() {
        let bundle = ClipboardBundle::from_mime_parts(vec![
            (MIME_TEXT_PLAIN, "first"),
            (MIME_MATHML, "<mn>1</mn>"),
            (MIME_TEXT_PLAIN, "second"),
        ]);
        assert_eq!(bundle.text, "second");
        assert_eq!(bundle.math_ml.as_deref(), Some("<mn>1</mn>"));
        assert!(bundle.html.is_none());
    }

    #[test]
    fn test_from_mime_parts_ignores_unknown() {
        let bundle = ClipboardBundle::from_mime_parts([("text/rtf", "{\\rtf1}")]);
        assert_eq!(bundle, ClipboardBundle::new());
    }

    #[test]
    fn test_is_empty() {
        assert!(ClipboardBundle::new().is_empty());
        assert!(ClipboardBundle::text_only("").with_html("").is_empty());
        assert!(!ClipboardBundle::text_only("").with_math_ml("<mi>x</mi>").is_empty());
    }

    #[test]
    fn test_json_field_names() {
        let bundle = ClipboardBundle::text_only("x").with_math_ml("<mi>x</mi>");
        let json = serde_json::to_string(&bundle).unwrap();
        assert_eq!(json, r#"{"text":"x","mathML":"<mi>x</mi>"}"#);

        let parsed: ClipboardBundle = serde_json::from_str(r#"{"html":"<i>y</i>"}"#).unwrap();
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.html.as_deref(), Some("<i>y</i>"));
    }

    #[test]
    fn test_representation_mime_and_display() {
        assert_eq!(Representation::MathMl.mime_type(), MIME_MATHML);
        assert_eq!(Representation::Html.mime_type(), MIME_TEXT_HTML);
        assert_eq!(Representation::PlainText.to_string(), "text");
    }
}
