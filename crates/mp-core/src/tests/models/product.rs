use crate::Product;

use chrono::Utc;

fn product(is_available: bool, is_sold: bool) -> Product {
    Product {
        id: "p1".into(),
        vendor_id: "v1".into(),
        name: "Chair".into(),
        description: "Wooden chair".into(),
        price: 15000.0,
        image: "https://cdn.example.com/chair.png".into(),
        is_available,
        is_sold,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        views: 0,
        interests: 0,
    }
}

#[test]
fn test_product_purchasable_only_when_available_and_unsold() {
    assert!(product(true, false).is_purchasable());
    assert!(!product(true, true).is_purchasable());
    assert!(!product(false, false).is_purchasable());
}

#[test]
fn test_product_deserializes_camel_case() {
    let json = r#"{
        "id": "p1", "vendorId": "v1", "name": "Chair", "description": "",
        "price": 1500.5, "image": "", "isAvailable": true, "isSold": false,
        "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z",
        "views": 12, "interests": 3
    }"#;

    let product: Product = serde_json::from_str(json).unwrap();

    assert_eq!(product.vendor_id, "v1");
    assert_eq!(product.views, 12);
    assert!(product.is_purchasable());
}
