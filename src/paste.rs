//! Paste actions exposed to the host editor.

use std::fmt;
use std::str::FromStr;

use crate::bundle::ClipboardBundle;
use crate::cleaner;
use crate::config::CleanerConfig;
use crate::error::Error;
use crate::latex;

/// The two user-invocable paste commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteAction {
    /// Paste clipboard text through the cleaner.
    CleanedText,
    /// Paste clipboard content converted to inline LaTeX math.
    Latex,
}

impl PasteAction {
    pub const ALL: [PasteAction; 2] = [PasteAction::CleanedText, PasteAction::Latex];

    /// Stable command id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::CleanedText => "paste-cleaned-text",
            Self::Latex => "paste-as-latex",
        }
    }

    /// Human-readable command name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CleanedText => "Paste Cleaned Text",
            Self::Latex => "Paste as LaTeX",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    /// Produces the string to insert at the selection.
    ///
    /// `CleanedText` only looks at `bundle.text`. `Latex` converts the richest
    /// representation and wraps it in `$` delimiters.
    pub fn render(&self, bundle: &ClipboardBundle, config: &CleanerConfig) -> String {
        match self {
            Self::CleanedText => cleaner::clean(&bundle.text, config),
            Self::Latex => wrap_inline_math(&latex::convert_to_latex(bundle)),
        }
    }
}

impl fmt::Display for PasteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PasteAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| Error::InvalidInput(format!("unknown paste action: {s}")))
    }
}

/// Wraps a LaTeX fragment in single-dollar inline math delimiters.
pub fn wrap_inline_math(latex: &str) -> String {
    format!("${latex}$")
}
