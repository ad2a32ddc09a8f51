//! Vendor subscription - grants the right to list up to `max_products`.

use crate::{PaymentStatus, SubscriptionPlan};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub vendor_id: String,
    #[serde(rename = "type")]
    pub plan: SubscriptionPlan,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub max_products: u32,
    pub price: f64,
    pub is_active: bool,
    pub payment_status: PaymentStatus,
}

impl Subscription {
    /// Active, paid for, and `now` falls inside `[start_date, end_date)`
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.payment_status == PaymentStatus::Completed
            && self.start_date <= now
            && now < self.end_date
    }

    /// Whether one more product fits under the plan's quota
    pub fn allows_another_product(&self, listed: u32) -> bool {
        listed < self.max_products
    }
}
