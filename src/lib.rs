//! Native-push glue for incoming VoIP calls and background messages.
//!
//! The crate owns the decision logic between a platform push transport and
//! its downstream collaborators: [`bridge`] classifies VoIP payloads and
//! routes them to the call UI, [`credentials`] holds refreshed push
//! credentials for future addressing, and [`notifications`] gates background
//! messages on the user's notification permission. Transport wiring, call
//! UI, and media are external collaborators reached through the traits each
//! module exposes.

pub mod bridge;
pub mod credentials;
pub mod notifications;
