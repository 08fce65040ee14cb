//! Background notification delivery.
//!
//! Companion path to the call bridge: messages arriving while no application
//! surface is in the foreground become user-visible notifications, gated on
//! the platform's notification permission.

mod api;
mod constants;
mod types;

pub use api::{BackgroundNotifier, DeliveryOutcome, NotificationDisplay, PermissionPrompt};
pub use constants::MESSAGE_BODY_KEY;
pub use types::{MessagePayload, NotificationContent, PermissionState};
