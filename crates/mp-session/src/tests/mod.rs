
pub(crate) const IDENTITY_JSON: &str = r#"{"id":"u1","email":"alice@x.com","name":"Alice","type":"client","createdAt":"2024-01-01T00:00:00Z"}"#;
