use crate::VendorProfile;

use serde_json::json;

#[test]
fn test_storefront_lists_only_available_products() {
    let product = |id: &str, available: bool, sold: bool| {
        json!({
            "id": id, "vendorId": "v1", "name": id, "description": "",
            "price": 1000.0, "image": "", "isAvailable": available, "isSold": sold,
            "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z",
            "views": 0, "interests": 0
        })
    };
    let profile: VendorProfile = serde_json::from_value(json!({
        "id": "v1",
        "name": "Chez Ama",
        "publicUrl": "https://market.example.com/vendor/v1",
        "whatsappNumber": "+229 97 00 00 00",
        "isActive": true,
        "products": [
            product("on-sale", true, false),
            product("sold", true, true),
            product("hidden", false, false)
        ],
        "stats": {
            "vendorId": "v1", "totalViews": 10, "totalInterests": 2,
            "totalProducts": 3, "linkClicks": 1
        }
    }))
    .unwrap();

    let ids: Vec<&str> = profile.available_products().map(|p| p.id.as_str()).collect();

    assert_eq!(ids, ["on-sale"]);
    assert!(profile.description.is_none());
    assert!(profile.stats.recent_activity.is_empty());
}
