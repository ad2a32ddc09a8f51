use crate::Identity;

use serde::{Deserialize, Serialize};

/// Body returned by `POST /login` and `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: String,
}
