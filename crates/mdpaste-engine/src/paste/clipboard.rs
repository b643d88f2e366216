use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Failed to read clipboard: {reason}")]
    Read { reason: String },

    #[error("Failed to write clipboard: {reason}")]
    Write { reason: String },
}

/// Textual clipboard access. Platform backends live in the front-ends.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard for headless use and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    deny_reads: bool,
    deny_writes: bool,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            ..Self::default()
        }
    }

    /// Makes every read fail, as when clipboard permission is refused.
    pub fn deny_reads(mut self) -> Self {
        self.deny_reads = true;
        self
    }

    pub fn deny_writes(mut self) -> Self {
        self.deny_writes = true;
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if self.deny_reads {
            return Err(ClipboardError::Read {
                reason: "permission denied".to_string(),
            });
        }
        Ok(self.contents.clone().unwrap_or_default())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny_writes {
            return Err(ClipboardError::Write {
                reason: "permission denied".to_string(),
            });
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_clipboard_reads_empty_string() {
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.read_text().unwrap(), "");
    }

    #[test]
    fn write_then_read() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.write_text("# TITLE").unwrap();
        assert_eq!(clipboard.read_text().unwrap(), "# TITLE");
    }

    #[test]
    fn denied_access_reports_reason() {
        let mut clipboard = MemoryClipboard::with_text("x").deny_reads().deny_writes();
        let read = clipboard.read_text().unwrap_err();
        assert_eq!(read.to_string(), "Failed to read clipboard: permission denied");
        assert!(matches!(
            clipboard.write_text("y"),
            Err(ClipboardError::Write { .. })
        ));
        assert_eq!(clipboard.contents(), Some("x"));
    }
}
