/// Data-map entry carrying the text shown for a background message.
pub const MESSAGE_BODY_KEY: &str = "message";
