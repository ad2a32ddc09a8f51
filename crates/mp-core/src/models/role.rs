use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account role, chosen at registration.
///
/// The backend stores vendors as `"vendeur"`; `"vendor"` is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Sells products and owns a dashboard
    #[serde(rename = "vendeur", alias = "vendor")]
    Vendor,
    /// Browses the storefront
    #[default]
    #[serde(rename = "client")]
    Client,
}

impl Role {
    /// Wire representation sent to the REST API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vendor => "vendeur",
            Self::Client => "client",
        }
    }

    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor)
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "vendeur" | "vendor" => Ok(Self::Vendor),
            "client" => Ok(Self::Client),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
