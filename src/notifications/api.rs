use std::sync::Arc;

use async_trait::async_trait;

use crate::notifications::types::{MessagePayload, PermissionState};

/// Platform notification-permission prompt.
///
/// `request` suspends until the user responds, then resolves to the state
/// they chose. A standing decision is reported by `current` without any
/// prompting.
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    fn current(&self) -> PermissionState;

    async fn request(&self) -> PermissionState;
}

/// Displays a user-visible notification.
pub trait NotificationDisplay: Send + Sync {
    fn show(&self, title: &str, body: Option<&str>);
}

/// Outcome of one background delivery decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// A notification was handed to the display collaborator.
    Shown,
    /// Permission was absent and not newly granted; nothing was displayed.
    Suppressed(PermissionState),
}

/// Decides whether a background message becomes a user-visible notification.
///
/// Permission is checked first; a `Default` state triggers a single prompt
/// and the delivery branches on the user's answer. A standing `Denied` is
/// honored silently and never re-prompted.
pub struct BackgroundNotifier {
    title: String,
    prompt: Arc<dyn PermissionPrompt>,
    display: Arc<dyn NotificationDisplay>,
}

impl BackgroundNotifier {
    pub fn new(
        title: impl Into<String>,
        prompt: Arc<dyn PermissionPrompt>,
        display: Arc<dyn NotificationDisplay>,
    ) -> Self {
        Self {
            title: title.into(),
            prompt,
            display,
        }
    }

    pub async fn deliver(&self, payload: &MessagePayload) -> DeliveryOutcome {
        match self.prompt.current() {
            PermissionState::Granted => self.show(payload),
            PermissionState::Denied => {
                log::debug!("background notification suppressed: permission denied");
                DeliveryOutcome::Suppressed(PermissionState::Denied)
            }
            PermissionState::Default => match self.prompt.request().await {
                PermissionState::Granted => self.show(payload),
                state => {
                    log::debug!("background notification suppressed after prompt");
                    DeliveryOutcome::Suppressed(state)
                }
            },
        }
    }

    fn show(&self, payload: &MessagePayload) -> DeliveryOutcome {
        self.display.show(&self.title, payload.display_body());
        DeliveryOutcome::Shown
    }
}
