//! Public storefront of a vendor, served at `/vendor/{id}`.

use crate::{Product, Stats};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub public_url: String,
    pub whatsapp_number: String,
    pub is_active: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    pub stats: Stats,
}

impl VendorProfile {
    /// Products a visitor can still ask about
    pub fn available_products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_purchasable())
    }
}
