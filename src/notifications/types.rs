use std::collections::HashMap;

use crate::notifications::constants::MESSAGE_BODY_KEY;

/// Notification permission states as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    /// The user has not decided whether to allow notifications.
    Default,
    /// The user granted notification permissions.
    Granted,
    /// The user denied notification permissions.
    Denied,
}

/// Content displayed to the user when a notification is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationContent {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// Message delivered while no application surface is in the foreground.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagePayload {
    pub notification: Option<NotificationContent>,
    pub data: HashMap<String, String>,
    pub from: Option<String>,
    pub collapse_key: Option<String>,
    pub message_id: Option<String>,
}

impl MessagePayload {
    /// Body shown for this message: the `message` entry of the data map, or
    /// the notification body when the sender set one instead.
    pub fn display_body(&self) -> Option<&str> {
        self.data
            .get(MESSAGE_BODY_KEY)
            .map(String::as_str)
            .or_else(|| {
                self.notification
                    .as_ref()
                    .and_then(|content| content.body.as_deref())
            })
    }
}
