pub mod file_store;
pub mod memory_store;

use crate::Result as SessionResult;

/// Storage key holding the serialized [`mp_core::Identity`]
pub const USER_KEY: &str = "marketplace_user";
/// Storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "marketplace_token";

/// String-valued key-value storage that outlives the process.
pub trait KeyValueStore: Send + Sync {
    /// A value that exists but is not text is [`SessionError::Malformed`](crate::SessionError::Malformed).
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Removing a key that is not present is not an error.
    fn remove(&self, key: &str) -> SessionResult<()>;
}
