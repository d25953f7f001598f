//! Clipboard sources and the degraded-read fallback.
//!
//! Reading the platform clipboard is the only step that can fail. A failed
//! full read falls back to a plain-text read, and the pipelines always get a
//! bundle.

use tracing::{debug, warn};

use crate::bundle::ClipboardBundle;
use crate::error::Result;

/// Something that can be read like a clipboard.
pub trait ClipboardSource {
    /// Reads every representation the source offers.
    fn read_bundle(&mut self) -> Result<ClipboardBundle>;

    /// Reads plain text only.
    fn read_text(&mut self) -> Result<String>;
}

/// Reads a full bundle, degrading to a text-only bundle on failure.
///
/// If the plain-text read fails too, an empty bundle is returned. Content is
/// never logged, only sizes.
pub fn read_bundle_or_text<S: ClipboardSource + ?Sized>(source: &mut S) -> ClipboardBundle {
    match source.read_bundle() {
        Ok(bundle) => {
            debug!(
                text_bytes = bundle.text.len(),
                has_html = bundle.html.is_some(),
                has_mathml = bundle.math_ml.is_some(),
                "Clipboard bundle read"
            );
            bundle
        }
        Err(err) => {
            warn!(error = %err, "Full clipboard read failed, falling back to plain text");
            match source.read_text() {
                Ok(text) => ClipboardBundle::text_only(text),
                Err(err) => {
                    warn!(error = %err, "Plain-text clipboard read failed, using empty bundle");
                    ClipboardBundle::new()
                }
            }
        }
    }
}

/// In-memory clipboard holding a fixed bundle.
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    bundle: ClipboardBundle,
}

impl StaticClipboard {
    pub fn new(bundle: ClipboardBundle) -> Self {
        Self { bundle }
    }
}

impl ClipboardSource for StaticClipboard {
    fn read_bundle(&mut self) -> Result<ClipboardBundle> {
        Ok(self.bundle.clone())
    }

    fn read_text(&mut self) -> Result<String> {
        Ok(self.bundle.text.clone())
    }
}
