use crate::{PaymentStatus, Subscription, SubscriptionPlan};

use chrono::{TimeDelta, TimeZone, Utc};

fn subscription(is_active: bool, payment_status: PaymentStatus) -> Subscription {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    Subscription {
        id: "s1".into(),
        vendor_id: "v1".into(),
        plan: SubscriptionPlan::Weekly,
        start_date: start,
        end_date: start + SubscriptionPlan::Weekly.duration(),
        max_products: 10,
        price: 2500.0,
        is_active,
        payment_status,
    }
}

#[test]
fn test_plan_durations() {
    assert_eq!(SubscriptionPlan::Daily.duration(), TimeDelta::days(1));
    assert_eq!(SubscriptionPlan::Weekly.duration(), TimeDelta::days(7));
    assert_eq!(SubscriptionPlan::Monthly.duration(), TimeDelta::days(30));
}

#[test]
fn test_subscription_current_inside_window() {
    let sub = subscription(true, PaymentStatus::Completed);
    assert!(sub.is_current(sub.start_date));
    assert!(sub.is_current(sub.start_date + TimeDelta::days(3)));
    assert!(!sub.is_current(sub.end_date));
    assert!(!sub.is_current(sub.start_date - TimeDelta::seconds(1)));
}

#[test]
fn test_subscription_not_current_when_unpaid_or_inactive() {
    let unpaid = subscription(true, PaymentStatus::Pending);
    assert!(!unpaid.is_current(unpaid.start_date));

    let inactive = subscription(false, PaymentStatus::Completed);
    assert!(!inactive.is_current(inactive.start_date));
}

#[test]
fn test_subscription_product_quota() {
    let sub = subscription(true, PaymentStatus::Completed);
    assert!(sub.allows_another_product(9));
    assert!(!sub.allows_another_product(10));
}

#[test]
fn test_subscription_type_key_on_wire() {
    let json = serde_json::to_value(subscription(true, PaymentStatus::Failed)).unwrap();
    assert_eq!(json["type"], "weekly");
    assert_eq!(json["paymentStatus"], "failed");
}
