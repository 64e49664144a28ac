use serde::{Deserialize, Serialize};

/// Order embedded in the `orders` array of a user document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
}

