use mp_core::Identity;

/// A signed-in identity together with its bearer token.
///
/// The two only ever exist as a pair: a signed-out client holds no `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub token: String,
}

impl Session {
    pub fn new(identity: Identity, token: impl Into<String>) -> Self {
        Self {
            identity,
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header for requests made on behalf of this session
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
