use mdpaste_engine::{Clipboard, ClipboardError};

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use and kept for the life of the app: on
/// X11 and Wayland the written text is only served while it is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable {
                    reason: e.to_string(),
                })?;
            self.inner = Some(clipboard);
        }

        self.inner.as_mut().ok_or_else(|| ClipboardError::Unavailable {
            reason: "clipboard handle missing".to_string(),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.handle()?.get_text() {
            Ok(text) => {
                log::debug!("Read {} bytes from clipboard", text.len());
                Ok(text)
            }
            // Empty or non-text clipboard: nothing to convert
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Read {
                reason: e.to_string(),
            }),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Write {
                reason: e.to_string(),
            })
    }
}
