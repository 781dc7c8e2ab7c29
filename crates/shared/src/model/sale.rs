use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub sale_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub user_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

/// Flat projection of a sale joined with its product and seller,
/// as produced by the sale listing query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SaleWithRelations {
    pub sale_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub created_at: Option<NaiveDateTime>,
    pub product_id: i32,
    pub product_name: String,
    pub product_price: f64,
    pub user_id: i32,
    pub user_name: String,
}
