pub const SIGNAL_TYPE_KEY: &str = "signal_type";
pub const SESSION_ID_KEY: &str = "session_id";
pub const CALLER_ID_KEY: &str = "caller_id";
pub const CALLER_NAME_KEY: &str = "caller_name";
pub const CALL_TYPE_KEY: &str = "call_type";

pub const SIGNAL_START_CALL: &str = "startCall";
pub const SIGNAL_END_CALL: &str = "endCall";
pub const SIGNAL_REJECT_CALL: &str = "rejectCall";

/// Handle classification shown by the system call UI for numeric caller ids.
pub const HANDLE_TYPE_GENERIC: &str = "generic";

pub const VIDEO_CALL_CODE: i64 = 1;
