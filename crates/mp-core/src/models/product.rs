//! Product listed by a vendor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Image URL
    pub image: String,
    pub is_available: bool,
    pub is_sold: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub views: u64,
    /// Number of "I'm interested" clicks
    pub interests: u64,
}

impl Product {
    /// Can a client still contact the vendor about this product
    pub fn is_purchasable(&self) -> bool {
        self.is_available && !self.is_sold
    }
}
