//! # pastex
//!
//! Clipboard cleanup and best-effort math-to-LaTeX conversion for document
//! editors.
//!
//! Two independent, pure pipelines:
//!
//! - **Text cleaner**: rejoins words hyphenated across line wraps and collapses
//!   line breaks and whitespace, for pasting as body text.
//! - **Math converter**: picks the richest clipboard representation (MathML,
//!   HTML, or plain text) and rewrites it into a LaTeX fragment.
//!
//! Reading the clipboard, persisting settings and inserting the result belong
//! to the host; [`source`], [`config::ConfigStore`] and [`paste`] provide the
//! pieces a host integration needs.
//!
//! ## Quick Start
//!
//! ```
//! use pastex::{clean, convert_to_latex, ClipboardBundle, CleanerConfig};
//!
//! let text = clean("A long hyphen-\nated\n\nparagraph", &CleanerConfig::default());
//! assert_eq!(text, "A long hyphenated paragraph");
//!
//! let bundle = ClipboardBundle::text_only("A = πr²");
//! assert_eq!(convert_to_latex(&bundle), "A = \\pi r^{2} ");
//! ```
//!
//! ## Features
//!
//! - `ffi`: C-ABI bindings for embedding in a host editor

pub mod bundle;
pub mod cleaner;
pub mod config;
pub mod error;
pub mod latex;
pub mod paste;
pub mod source;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use bundle::{ClipboardBundle, Representation};
pub use cleaner::clean;
pub use config::{CleanerConfig, ConfigStore};
pub use error::{Error, Result};
pub use latex::symbols::{substitute_symbols, SymbolTable};
pub use latex::{convert_html_to_latex, convert_mathml_to_latex, convert_to_latex, ConversionRule};
pub use paste::{wrap_inline_math, PasteAction};
pub use source::{read_bundle_or_text, ClipboardSource, StaticClipboard};

/// Reads a source with the degraded fallback and runs `action` on it.
///
/// # Example
///
/// ```
/// use pastex::{paste_from, ClipboardBundle, CleanerConfig, PasteAction, StaticClipboard};
///
/// let mut clipboard = StaticClipboard::new(ClipboardBundle::text_only("x ≤ y"));
/// let out = paste_from(&mut clipboard, PasteAction::Latex, &CleanerConfig::default());
/// assert_eq!(out, "$x \\leq  y$");
/// ```
pub fn paste_from<S: ClipboardSource + ?Sized>(
    source: &mut S,
    action: PasteAction,
    config: &CleanerConfig,
) -> String {
    let bundle = read_bundle_or_text(source);
    action.render(&bundle, config)
}
