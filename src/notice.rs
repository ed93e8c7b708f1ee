//! Single-slot transient error surface with auto-hide.

use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How long a notice stays visible before auto-hiding.
pub const AUTO_HIDE: Duration = Duration::from_secs(10);

#[derive(Debug, Default)]
struct Slot {
    message: Option<String>,
    generation: u64,
}

/// The transient notification channel. One message at a time; a newer
/// `show` replaces the current message and supersedes the pending
/// auto-hide of the older one (an expired timer only hides the message it
/// was scheduled for).
///
/// `show` spawns the auto-hide timer on the ambient tokio runtime.
#[derive(Debug, Clone, Default)]
pub struct ErrorSurface {
    slot: Arc<Mutex<Slot>>,
}

impl ErrorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message, overwriting any current one, and schedule auto-hide
    /// after [`AUTO_HIDE`].
    pub fn show(&self, message: impl Into<String>) {
        let generation = {
            let mut slot = self.slot.lock().unwrap();
            slot.message = Some(message.into());
            slot.generation += 1;
            slot.generation
        };
        let slot = Arc::clone(&self.slot);
        tokio::spawn(async move {
            tokio::time::sleep(AUTO_HIDE).await;
            let mut slot = slot.lock().unwrap();
            if slot.generation == generation {
                slot.message = None;
            }
        });
    }

    /// Idempotent.
    pub fn hide(&self) {
        self.slot.lock().unwrap().message = None;
    }

    pub fn message(&self) -> Option<String> {
        self.slot.lock().unwrap().message.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.slot.lock().unwrap().message.is_some()
    }
}
