mod models;

use crate::{Identity, Role};

use chrono::{TimeZone, Utc};

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: "u1".to_string(),
        email: "alice@x.com".to_string(),
        name: "Alice".to_string(),
        role,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        phone: None,
        whatsapp_number: None,
    }
}
