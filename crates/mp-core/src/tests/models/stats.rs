use crate::{ActivityKind, Stats};

#[test]
fn test_interest_rate_zero_without_views() {
    let stats = Stats {
        vendor_id: "v1".into(),
        total_views: 0,
        total_interests: 0,
        total_products: 0,
        link_clicks: 0,
        top_product: None,
        recent_activity: vec![],
    };
    assert_eq!(stats.interest_rate(), 0.0);
}

#[test]
fn test_stats_deserialize_with_activity_feed() {
    let json = r#"{
        "vendorId": "v1", "totalViews": 200, "totalInterests": 50,
        "totalProducts": 4, "linkClicks": 7,
        "recentActivity": [
            {"id": "a1", "type": "product_sold", "productId": "p1", "timestamp": "2024-01-01T00:00:00Z"},
            {"id": "a2", "type": "link_click", "timestamp": "2024-01-02T00:00:00Z", "metadata": {"source": "whatsapp"}}
        ]
    }"#;

    let stats: Stats = serde_json::from_str(json).unwrap();

    assert_eq!(stats.interest_rate(), 0.25);
    assert_eq!(stats.recent_activity.len(), 2);
    assert_eq!(stats.recent_activity[0].kind, ActivityKind::ProductSold);
    assert_eq!(stats.recent_activity[0].product_id.as_deref(), Some("p1"));
    let metadata = stats.recent_activity[1].metadata.as_ref().unwrap();
    assert_eq!(metadata["source"], "whatsapp");
    assert!(stats.top_product.is_none());
}
