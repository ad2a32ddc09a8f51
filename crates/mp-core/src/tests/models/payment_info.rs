use crate::{PaymentInfo, PaymentMethod};

use serde_json::json;

#[test]
fn test_payment_info_wire_format() {
    let info = PaymentInfo {
        phone: "+229 97 00 00 00".into(),
        amount: 2500.0,
        method: PaymentMethod::MobileMoney,
        reference: "SUB-2024-001".into(),
    };

    let value = serde_json::to_value(&info).unwrap();

    assert_eq!(
        value,
        json!({
            "phone": "+229 97 00 00 00",
            "amount": 2500.0,
            "type": "mobile_money",
            "reference": "SUB-2024-001"
        })
    );
    assert_eq!(serde_json::from_value::<PaymentInfo>(value).unwrap(), info);
}

#[test]
fn test_unknown_payment_type_rejected() {
    let result = serde_json::from_value::<PaymentInfo>(json!({
        "phone": "+229 97", "amount": 100.0, "type": "card", "reference": "r"
    }));

    assert!(result.is_err());
}
