use crate::tests::identity;
use crate::{Identity, Role};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_backend_snake_case_payload_when_deserialize_then_maps_all_fields() {
    let json = r#"{
        "id": 42,
        "email": "bob@x.com",
        "name": "Bob",
        "type": "vendeur",
        "created_at": "2024-05-01T10:00:00.000000Z",
        "phone": "+229 01 02 03 04",
        "whatsapp_number": "+229 05 06 07 08"
    }"#;

    let user: Identity = serde_json::from_str(json).unwrap();

    assert_that!(user.id.as_str(), eq("42"));
    assert_that!(user.role, eq(Role::Vendor));
    assert_that!(user.phone, some(eq("+229 01 02 03 04")));
    assert_that!(user.whatsapp_number, some(eq("+229 05 06 07 08")));
}

#[test]
fn given_identity_when_serialize_then_uses_camel_case_and_type_key() {
    let mut user = identity(Role::Client);
    user.whatsapp_number = Some("+229 11".into());

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["type"], "client");
    assert_eq!(json["whatsappNumber"], "+229 11");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("phone").is_none());
}

#[test]
fn given_missing_optional_fields_when_deserialize_then_defaults_to_none() {
    let json = r#"{"id":"u1","email":"a@x.com","name":"A","type":"client","createdAt":"2024-01-01T00:00:00Z"}"#;

    let user: Identity = serde_json::from_str(json).unwrap();

    assert_that!(user.phone, none());
    assert_that!(user.whatsapp_number, none());
}

#[test]
fn given_unknown_role_when_deserialize_then_fails() {
    let json = r#"{"id":"u1","email":"a@x.com","name":"A","type":"admin","createdAt":"2024-01-01T00:00:00Z"}"#;

    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_whatsapp_number_when_contact_number_then_prefers_it_over_phone() {
    let mut user = identity(Role::Vendor);
    user.phone = Some("111".into());
    user.whatsapp_number = Some("222".into());
    assert_eq!(user.contact_number(), Some("222"));

    user.whatsapp_number = None;
    assert_eq!(user.contact_number(), Some("111"));

    user.phone = Some("  ".into());
    assert_eq!(user.contact_number(), None);
}
