use std::time::{Duration, Instant};

/// Drops paste requests that arrive within the refractory period of the
/// last accepted one. Dropped requests do not extend the window.
#[derive(Debug, Clone)]
pub struct PasteGuard {
    refractory: Duration,
    last_accepted: Option<Instant>,
}

impl PasteGuard {
    pub const DEFAULT_REFRACTORY: Duration = Duration::from_millis(1000);

    pub fn new(refractory: Duration) -> Self {
        Self {
            refractory,
            last_accepted: None,
        }
    }

    pub fn try_accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.saturating_duration_since(last) < self.refractory => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

impl Default for PasteGuard {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REFRACTORY)
    }
}
