use serde::{Deserialize, Serialize};

/// Opaque push credentials delivered by the transport.
///
/// The bridge owns an update only long enough to forward it; interpreting and
/// persisting the token belong to the registry collaborator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushCredentials {
    pub token: String,
}

impl PushCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Credential-registry collaborator: persists or forwards refreshed
/// credentials for future push addressing.
pub trait CredentialRegistry: Send + Sync {
    fn register_credentials(&self, credentials: PushCredentials);
}
