//! Call signal bridge.
//!
//! Receives the dictionary payload of a VoIP push, classifies it into a typed
//! signal, and routes it to exactly one effect: present the incoming-call UI,
//! suppress an end/reject signal, or drop a malformed event. The transport's
//! completion callback fires exactly once per payload regardless of outcome.

mod api;
mod completion;
mod constants;
pub mod error;
mod types;

pub use api::{CallPresenter, Dispatch, PushBridge};
pub use completion::CompletionGuard;
pub use constants::HANDLE_TYPE_GENERIC;
pub use types::{CallMedia, CallSignal, CompletionHandler, IncomingCall, PushPayload, StartCall};
