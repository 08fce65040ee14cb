use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::types::{CredentialRegistry, PushCredentials};

/// Stored credential entry for one registry key.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialRecord {
    pub token: String,
    pub received_at_ms: u64,
}

static STORE: Lazy<Mutex<HashMap<String, CredentialRecord>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

pub fn read_credentials(registry_key: &str) -> Option<CredentialRecord> {
    STORE.lock().unwrap().get(registry_key).cloned()
}

pub fn write_credentials(registry_key: &str, record: &CredentialRecord) {
    STORE
        .lock()
        .unwrap()
        .insert(registry_key.to_string(), record.clone());
}

/// Removes the stored entry, reporting whether one existed.
pub fn remove_credentials(registry_key: &str) -> bool {
    STORE.lock().unwrap().remove(registry_key).is_some()
}

/// In-process credential registry keyed by application name.
///
/// Keeps the most recent credentials per key so later token registration can
/// address this device.
#[derive(Clone, Debug)]
pub struct MemoryCredentialStore {
    registry_key: String,
}

impl MemoryCredentialStore {
    pub fn new(registry_key: impl Into<String>) -> Self {
        Self {
            registry_key: registry_key.into(),
        }
    }

    pub fn latest(&self) -> Option<CredentialRecord> {
        read_credentials(&self.registry_key)
    }

    pub fn clear(&self) -> bool {
        remove_credentials(&self.registry_key)
    }
}

impl CredentialRegistry for MemoryCredentialStore {
    fn register_credentials(&self, credentials: PushCredentials) {
        let record = CredentialRecord {
            token: credentials.token,
            received_at_ms: current_timestamp_ms(),
        };
        write_credentials(&self.registry_key, &record);
        log::debug!("stored refreshed push credentials for \"{}\"", self.registry_key);
    }
}

fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
