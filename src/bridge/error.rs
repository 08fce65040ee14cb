use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeErrorCode {
    MalformedSignal,
    InvalidStartCallPayload,
}

impl BridgeErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BridgeErrorCode::MalformedSignal => "bridge/malformed-signal",
            BridgeErrorCode::InvalidStartCallPayload => "bridge/invalid-start-call",
        }
    }
}

/// Terminal classification error for one push payload.
///
/// Classification errors are never retried or re-queued; the transport owns
/// redelivery policy. The payload is dropped after the error is reported.
#[derive(Clone, Debug)]
pub struct BridgeError {
    pub code: BridgeErrorCode,
    message: String,
}

impl BridgeError {
    pub fn new(code: BridgeErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for BridgeError {}

pub type BridgeResult<T> = Result<T, BridgeError>;

pub fn malformed_signal(message: impl Into<String>) -> BridgeError {
    BridgeError::new(BridgeErrorCode::MalformedSignal, message)
}

pub fn invalid_start_call(message: impl Into<String>) -> BridgeError {
    BridgeError::new(BridgeErrorCode::InvalidStartCallPayload, message)
}
