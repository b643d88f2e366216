pub mod convert;
pub mod notify;
pub mod paste;

// Re-export key types for easier usage
pub use convert::{FenceLang, LineKind, convert};
pub use notify::{Notification, NotificationSink, NotifyKind, ToastQueue};
pub use paste::{
    Clipboard, ClipboardError, MemoryClipboard, PasteGuard, PasteOutcome, PasteSession,
    PasteSettings,
};
