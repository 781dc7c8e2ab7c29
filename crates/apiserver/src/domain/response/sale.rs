use serde::{Deserialize, Serialize};
use shared::model::{Sale as SaleModel, SaleWithRelations};

/// Sale listing entry with the product and seller projections nested the
/// way the listing endpoint exposes them.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SaleResponse {
    pub id: i32,
    pub product: SaleProductResponse,
    pub user: SaleUserResponse,
    pub quantity: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SaleProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SaleUserResponse {
    pub id: i32,
    pub name: String,
}

impl From<SaleWithRelations> for SaleResponse {
    fn from(value: SaleWithRelations) -> Self {
        SaleResponse {
            id: value.sale_id,
            product: SaleProductResponse {
                id: value.product_id,
                name: value.product_name,
                price: value.product_price,
            },
            user: SaleUserResponse {
                id: value.user_id,
                name: value.user_name,
            },
            quantity: value.quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// Flat view of a freshly created sale row.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SaleRecordResponse {
    pub id: i32,
    #[serde(rename = "productId")]
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl From<SaleModel> for SaleRecordResponse {
    fn from(value: SaleModel) -> Self {
        SaleRecordResponse {
            id: value.sale_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            user_id: value.user_id,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
