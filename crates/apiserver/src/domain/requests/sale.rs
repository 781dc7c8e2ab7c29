use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateSaleRequest {
    #[serde(rename = "productId")]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,
}

#[derive(Debug, Clone)]
pub struct CreateSaleRecord {
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub user_id: i32,
}
