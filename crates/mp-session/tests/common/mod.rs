#![allow(dead_code)]

use mp_session::{
    ApiClient, KeyValueStore, MemoryStore, Result as SessionResult, SessionClient, SessionError,
    TOKEN_KEY, USER_KEY,
};

use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api";

pub fn user_json(id: &str, role: &str) -> Value {
    json!({
        "id": id,
        "email": "alice@x.com",
        "name": "Alice",
        "type": role,
        "createdAt": "2024-01-01T00:00:00Z",
        "phone": "+229 01 02 03 04"
    })
}

pub fn auth_json(id: &str, role: &str, token: &str) -> Value {
    json!({ "user": user_json(id, role), "token": token })
}

pub fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&format!("{}{API_PREFIX}", server.uri()))
}

pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// Client over an empty in-memory store
pub fn signed_out_client(server: &MockServer) -> (SessionClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = SessionClient::load(api_for(server), store.clone()).unwrap();
    (client, store)
}

/// Client whose store already holds a complete record
pub fn signed_in_client(api: ApiClient, role: &str, token: &str) -> (SessionClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store
        .set(USER_KEY, &user_json("u1", role).to_string())
        .unwrap();
    store.set(TOKEN_KEY, token).unwrap();
    let client = SessionClient::load(api, store.clone()).unwrap();
    assert!(client.is_authenticated());
    (client, store)
}

/// Base URL on a local port nothing listens on.
///
/// `MockServer` instances are pooled, so dropping one does not close its port.
pub fn dead_api() -> ApiClient {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    ApiClient::new(&format!("http://127.0.0.1:{port}{API_PREFIX}"))
}

/// Memory store whose writes to one key can be made to fail
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_key: Mutex<Option<&'static str>>,
}

impl FailingStore {
    pub fn fail_writes_to(&self, key: &'static str) {
        *self.fail_key.lock().unwrap() = Some(key);
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        if *self.fail_key.lock().unwrap() == Some(key) {
            return Err(SessionError::storage(
                key,
                PathBuf::from("/read-only"),
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.inner.remove(key)
    }
}
