use crate::{ActivityLog, Product};

use serde::{Deserialize, Serialize};

/// Aggregated dashboard figures for one vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub vendor_id: String,
    pub total_views: u64,
    pub total_interests: u64,
    pub total_products: u64,
    pub link_clicks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_product: Option<Product>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityLog>,
}

impl Stats {
    /// Interests per view, 0.0 when nothing has been viewed yet
    pub fn interest_rate(&self) -> f64 {
        if self.total_views == 0 {
            return 0.0;
        }
        self.total_interests as f64 / self.total_views as f64
    }
}
