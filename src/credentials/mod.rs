//! Push credential records and the registry seam the bridge forwards to.

mod store;
mod types;

pub use store::{
    read_credentials, remove_credentials, write_credentials, CredentialRecord,
    MemoryCredentialStore,
};
pub use types::{CredentialRegistry, PushCredentials};
