use crate::{Result as SessionResult, SessionError};

use mp_core::{AuthResponse, Identity, ProfileUpdate, Role};

use reqwest::{Client as ReqwestClient, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the marketplace REST API.
///
/// Holds no credentials: every call that needs one receives the bearer token
/// explicitly.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: ReqwestClient,
}

/// Body of `POST /register`
#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'a str>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API origin and base path (e.g., "http://localhost:8000/api")
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, ReqwestClient::new())
    }

    /// Create a client on top of a preconfigured reqwest client (timeouts, proxies, ...)
    pub fn with_client(base_url: &str, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request, carrying `Authorization: Bearer <token>` when a token is given
    pub fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send the request and decode a successful JSON body
    pub async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> SessionResult<T> {
        let bytes = Self::send(req).await?;
        serde_json::from_slice(&bytes).map_err(SessionError::from_json)
    }

    /// Send the request, discarding whatever body comes back
    pub async fn execute_empty(&self, req: RequestBuilder) -> SessionResult<()> {
        Self::send(req).await.map(|_| ())
    }

    async fn send(req: RequestBuilder) -> SessionResult<Vec<u8>> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let code = status.as_u16();
            return Err(SessionError::api(code, rejection_message(code, &bytes)));
        }

        Ok(bytes.to_vec())
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    pub(crate) async fn register(
        &self,
        body: &RegisterRequest<'_>,
    ) -> SessionResult<AuthResponse> {
        let req = self.request(Method::POST, "/register", None).json(body);
        self.execute(req).await
    }

    pub(crate) async fn login(&self, login: &str, password: &str) -> SessionResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            login: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { login, password };
        let req = self.request(Method::POST, "/login", None).json(&body);
        self.execute(req).await
    }

    pub(crate) async fn logout(&self, token: &str) -> SessionResult<()> {
        let req = self.request(Method::POST, "/logout", Some(token));
        self.execute_empty(req).await
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    pub(crate) async fn update_user(
        &self,
        id: &str,
        update: &ProfileUpdate,
        token: &str,
    ) -> SessionResult<Identity> {
        let req = self
            .request(Method::PUT, &format!("/users/{id}"), Some(token))
            .json(update);
        self.execute(req).await
    }
}

/// Pick the server's explanation out of an error body.
///
/// Looks at `message`, then `error.message`, then falls back to a generic text.
pub(crate) fn rejection_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(Value::as_str)
                .or_else(|| body.pointer("/error/message").and_then(Value::as_str))
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
