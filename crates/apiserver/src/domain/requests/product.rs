use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateProductRequest {
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: f64,

    #[serde(rename = "categoryId")]
    pub category_id: i32,
}

/// Partial product update. Absent fields fall back to the stored values;
/// unknown fields are rejected. Stock quantity is not mutable here.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub id: i32,

    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Price must be a positive number"))]
    pub price: Option<f64>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ProductIdRequest {
    pub id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ProductDetailsQuery {
    pub id: i32,
}

#[derive(Debug, Clone)]
pub struct CreateProductRecord {
    pub name: String,
    pub price: f64,
    pub category_id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct UpdateProductRecord {
    pub product_id: i32,
    pub name: String,
    pub price: f64,
    pub category_id: i32,
}
