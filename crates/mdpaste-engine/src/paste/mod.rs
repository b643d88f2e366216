//! # Paste Session
//!
//! Glue between a clipboard, the converter and a notification sink: read,
//! convert, notify, and optionally copy the Markdown back. Clipboard failures
//! stop here and become a single error notification; nothing is retried.

pub mod clipboard;
pub mod guard;

use std::time::{Duration, Instant};

use crate::{
    convert::convert,
    notify::{NotificationSink, NotifyKind},
};

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use guard::PasteGuard;

pub const MSG_CONVERTED: &str = "Text pasted and converted!";
pub const MSG_COPIED: &str = "Markdown copied to clipboard!";
pub const MSG_READ_FAILED: &str = "Failed to read clipboard";
pub const MSG_COPY_FAILED: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteSettings {
    /// Minimum gap between accepted paste requests.
    pub refractory: Duration,
    pub toast_duration: Duration,
    /// Delay between the "converted" and "copied" notices.
    pub copy_notice_delay: Duration,
    /// Write the converted Markdown back to the clipboard after a paste.
    pub auto_copy: bool,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            refractory: PasteGuard::DEFAULT_REFRACTORY,
            toast_duration: Duration::from_millis(3000),
            copy_notice_delay: Duration::from_millis(500),
            auto_copy: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Dropped by the refractory guard.
    Throttled,
    /// The clipboard held nothing but whitespace.
    Empty,
    /// The clipboard could not be read.
    Failed,
    Converted { markdown: String },
}

/// Holds the most recent conversion and the guard against repeated pastes.
#[derive(Debug)]
pub struct PasteSession {
    settings: PasteSettings,
    guard: PasteGuard,
    markdown: Option<String>,
}

impl PasteSession {
    pub fn new(settings: PasteSettings) -> Self {
        Self {
            guard: PasteGuard::new(settings.refractory),
            settings,
            markdown: None,
        }
    }

    pub fn settings(&self) -> &PasteSettings {
        &self.settings
    }

    /// The Markdown from the last successful paste.
    pub fn markdown(&self) -> Option<&str> {
        self.markdown.as_deref()
    }

    /// Handles one paste request received at `now`.
    pub fn paste<C, S>(&mut self, now: Instant, clipboard: &mut C, sink: &mut S) -> PasteOutcome
    where
        C: Clipboard + ?Sized,
        S: NotificationSink + ?Sized,
    {
        if !self.guard.try_accept(now) {
            log::debug!("Paste request dropped within refractory period");
            return PasteOutcome::Throttled;
        }

        let text = match clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{e}");
                sink.notify(MSG_READ_FAILED, NotifyKind::Error, self.settings.toast_duration);
                return PasteOutcome::Failed;
            }
        };

        if text.trim().is_empty() {
            log::debug!("Clipboard is empty, nothing to convert");
            return PasteOutcome::Empty;
        }

        let markdown = convert(&text);
        log::info!(
            "Converted {} bytes of clipboard text into {} bytes of Markdown",
            text.len(),
            markdown.len()
        );
        self.markdown = Some(markdown.clone());
        sink.notify(MSG_CONVERTED, NotifyKind::Success, self.settings.toast_duration);

        if self.settings.auto_copy {
            match clipboard.write_text(&markdown) {
                Ok(()) => sink.notify_later(
                    self.settings.copy_notice_delay,
                    MSG_COPIED,
                    NotifyKind::Success,
                    self.settings.toast_duration,
                ),
                Err(e) => {
                    log::warn!("{e}");
                    sink.notify(MSG_COPY_FAILED, NotifyKind::Error, self.settings.toast_duration);
                }
            }
        }

        PasteOutcome::Converted { markdown }
    }

    /// Copies the current Markdown to the clipboard. Returns whether anything
    /// was written.
    pub fn copy_current<C, S>(&self, clipboard: &mut C, sink: &mut S) -> bool
    where
        C: Clipboard + ?Sized,
        S: NotificationSink + ?Sized,
    {
        let Some(markdown) = self.markdown.as_deref() else {
            return false;
        };

        match clipboard.write_text(markdown) {
            Ok(()) => {
                sink.notify(MSG_COPIED, NotifyKind::Success, self.settings.toast_duration);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                sink.notify(MSG_COPY_FAILED, NotifyKind::Error, self.settings.toast_duration);
                false
            }
        }
    }
}

impl Default for PasteSession {
    fn default() -> Self {
        Self::new(PasteSettings::default())
    }
}
