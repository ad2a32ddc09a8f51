//! mp-session
//!
//! Client-side session for the marketplace REST API: restores the signed-in
//! identity from local storage, performs login/register/logout/profile
//! updates, and keeps the persisted record in step with the in-memory session.

pub mod api_client;
pub mod error;
pub mod load_result;
pub mod session;
pub mod session_client;
pub mod store;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use error::{Result, SessionError, SessionErrorKind};
pub use load_result::LoadResult;
pub use session::Session;
pub use session_client::SessionClient;
pub use store::{
    KeyValueStore, TOKEN_KEY, USER_KEY, file_store::FileStore, memory_store::MemoryStore,
};

pub use reqwest::Method;
