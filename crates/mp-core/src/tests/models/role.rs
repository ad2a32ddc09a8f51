use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Vendor.as_str(), "vendeur");
    assert_eq!(Role::Client.as_str(), "client");
}

#[test]
fn test_role_from_str_accepts_both_vendor_spellings() {
    assert_eq!(Role::from_str("vendeur").unwrap(), Role::Vendor);
    assert_eq!(Role::from_str("vendor").unwrap(), Role::Vendor);
    assert_eq!(Role::from_str(" Vendor ").unwrap(), Role::Vendor);
    assert_eq!(Role::from_str("client").unwrap(), Role::Client);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let err = Role::from_str("admin").unwrap_err();
    assert!(matches!(err, CoreError::InvalidRole { ref value, .. } if value == "admin"));
}

#[test]
fn test_role_default_is_client() {
    assert_eq!(Role::default(), Role::Client);
}

#[test]
fn test_role_serializes_to_wire_value() {
    assert_eq!(serde_json::to_string(&Role::Vendor).unwrap(), "\"vendeur\"");
    assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
}

#[test]
fn test_role_deserializes_vendor_alias() {
    let role: Role = serde_json::from_str("\"vendor\"").unwrap();
    assert_eq!(role, Role::Vendor);
}
