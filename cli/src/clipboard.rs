//! System clipboard access through arboard.

use arboard::Clipboard;
use pastex::{ClipboardBundle, ClipboardSource, Error, Result};
use tracing::debug;

/// The platform clipboard.
///
/// arboard exposes plain text and HTML. MathML is never offered, so the
/// MathML path is only reachable through files or the C ABI.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn open() -> Result<Self> {
        let inner = Clipboard::new().map_err(clipboard_error)?;
        Ok(Self { inner })
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_bundle(&mut self) -> Result<ClipboardBundle> {
        let html = match self.inner.get().html() {
            Ok(html) => Some(html),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => return Err(clipboard_error(e)),
        };
        let text = match self.inner.get_text() {
            Ok(text) => text,
            Err(arboard::Error::ContentNotAvailable) => String::new(),
            Err(e) => return Err(clipboard_error(e)),
        };
        debug!(
            text_bytes = text.len(),
            has_html = html.is_some(),
            "Read system clipboard"
        );

        let mut bundle = ClipboardBundle::text_only(text);
        bundle.html = html;
        Ok(bundle)
    }

    fn read_text(&mut self) -> Result<String> {
        self.inner.get_text().map_err(clipboard_error)
    }
}

fn clipboard_error(err: arboard::Error) -> Error {
    Error::Clipboard(err.to_string())
}
