use std::collections::HashMap;

use serde_json::Value;

use crate::bridge::constants::{
    CALLER_ID_KEY, CALLER_NAME_KEY, CALL_TYPE_KEY, HANDLE_TYPE_GENERIC, SESSION_ID_KEY,
    SIGNAL_END_CALL, SIGNAL_REJECT_CALL, SIGNAL_START_CALL, SIGNAL_TYPE_KEY, VIDEO_CALL_CODE,
};
use crate::bridge::error::{invalid_start_call, malformed_signal, BridgeResult};

/// Dictionary payload delivered by the VoIP push transport.
///
/// Produced outside the process, so every field is untrusted: any key may be
/// absent or hold a value of the wrong type. Classification never assumes a
/// well-formed payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PushPayload {
    fields: HashMap<String, Value>,
}

impl PushPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Parses a JSON object into a payload.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let fields: HashMap<String, Value> = serde_json::from_str(raw)?;
        Ok(Self { fields })
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn integer_field(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }
}

/// Media requested for a call session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallMedia {
    Audio,
    Video,
}

impl CallMedia {
    /// Maps the wire code onto a media kind. Only the video code selects
    /// video; every other integer is treated as audio-only.
    pub fn from_code(code: i64) -> Self {
        if code == VIDEO_CALL_CODE {
            CallMedia::Video
        } else {
            CallMedia::Audio
        }
    }

    pub fn has_video(self) -> bool {
        matches!(self, CallMedia::Video)
    }
}

/// Typed fields of a start-call signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartCall {
    pub session_id: String,
    pub caller_id: i64,
    pub caller_name: String,
    pub media: CallMedia,
}

impl StartCall {
    pub fn has_video(&self) -> bool {
        self.media.has_video()
    }

    /// Display handle shown by the call UI for the calling party.
    pub fn handle(&self) -> String {
        self.caller_id.to_string()
    }
}

/// Classification of one inbound push payload.
///
/// End/reject signals are informational only: the call UI updates through its
/// own path, so the bridge suppresses them without re-dispatching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallSignal {
    Start(StartCall),
    End,
    Reject,
}

impl CallSignal {
    /// Classifies an untrusted payload into a typed signal.
    ///
    /// An absent or unrecognized `signal_type` fails with
    /// `bridge/malformed-signal`; a start-call payload with a missing or
    /// mistyped required field fails with `bridge/invalid-start-call`.
    pub fn classify(payload: &PushPayload) -> BridgeResult<CallSignal> {
        let signal = payload.string_field(SIGNAL_TYPE_KEY).ok_or_else(|| {
            malformed_signal("Push payload carries no string signal_type field")
        })?;

        match signal {
            SIGNAL_END_CALL => Ok(CallSignal::End),
            SIGNAL_REJECT_CALL => Ok(CallSignal::Reject),
            SIGNAL_START_CALL => Self::classify_start(payload).map(CallSignal::Start),
            other => Err(malformed_signal(format!(
                "Unrecognized signal_type \"{other}\""
            ))),
        }
    }

    fn classify_start(payload: &PushPayload) -> BridgeResult<StartCall> {
        let session_id = payload.string_field(SESSION_ID_KEY).ok_or_else(|| {
            invalid_start_call("Start-call payload missing string session_id")
        })?;
        let caller_id = payload.integer_field(CALLER_ID_KEY).ok_or_else(|| {
            invalid_start_call("Start-call payload missing integer caller_id")
        })?;
        let caller_name = payload.string_field(CALLER_NAME_KEY).ok_or_else(|| {
            invalid_start_call("Start-call payload missing string caller_name")
        })?;
        let call_type = payload.integer_field(CALL_TYPE_KEY).ok_or_else(|| {
            invalid_start_call("Start-call payload missing integer call_type")
        })?;

        Ok(StartCall {
            session_id: session_id.to_string(),
            caller_id,
            caller_name: caller_name.to_string(),
            media: CallMedia::from_code(call_type),
        })
    }
}

/// What the call-presentation collaborator receives for a new incoming call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingCall {
    pub session_id: String,
    pub handle: String,
    pub handle_type: String,
    pub has_video: bool,
    pub caller_name: String,
}

impl IncomingCall {
    pub fn from_start(call: &StartCall) -> Self {
        Self {
            session_id: call.session_id.clone(),
            handle: call.handle(),
            handle_type: HANDLE_TYPE_GENERIC.to_string(),
            has_video: call.has_video(),
            caller_name: call.caller_name.clone(),
        }
    }
}

/// Transport acknowledgment callback, fired exactly once per delivery.
pub type CompletionHandler = Box<dyn FnOnce() + Send + 'static>;
