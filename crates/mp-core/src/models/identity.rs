//! Identity - the authenticated principal returned by the REST API.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user.
///
/// Serialized camelCase (this is also the persisted form). Snake_case field
/// names from the backend are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque identifier; numeric ids from the backend are kept as strings
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(alias = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, alias = "whatsapp_number", skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
}

impl Identity {
    pub fn is_vendor(&self) -> bool {
        self.role.is_vendor()
    }

    /// Best contact number for WhatsApp links: the dedicated number, else the phone
    pub fn contact_number(&self) -> Option<&str> {
        self.whatsapp_number
            .as_deref()
            .or(self.phone.as_deref())
            .filter(|n| !n.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
