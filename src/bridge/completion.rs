//! Scoped holder of the transport's delivery acknowledgment.
//!
//! VoIP pushes carry a completion deadline: the transport throttles or stops
//! future deliveries for a process that fails to acknowledge a payload. The
//! guard models the pending acknowledgment as an owned obligation that is
//! released exactly once on every exit path, including propagated errors and
//! unwinding.

use crate::bridge::types::CompletionHandler;

pub struct CompletionGuard {
    handler: Option<CompletionHandler>,
}

impl CompletionGuard {
    pub fn new(handler: CompletionHandler) -> Self {
        Self {
            handler: Some(handler),
        }
    }

    /// Fires the acknowledgment now, consuming the guard.
    pub fn complete(mut self) {
        self.fire();
    }

    fn fire(&mut self) {
        if let Some(handler) = self.handler.take() {
            handler();
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.fire();
    }
}
