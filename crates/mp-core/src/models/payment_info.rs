use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    MobileMoney,
}

/// Mobile-money payment request for a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub phone: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub method: PaymentMethod,
    pub reference: String,
}
