use serde::{Deserialize, Serialize};
use shared::model::Product as ProductModel;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    pub quantity: i32,
    #[serde(rename = "userId")]
    pub user_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
            category_id: value.category_id,
            quantity: value.quantity,
            user_id: value.user_id,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}
