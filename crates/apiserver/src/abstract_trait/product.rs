use crate::domain::{
    requests::{
        pagination::SortOrder,
        product::{CreateProductRecord, UpdateProductRecord, UpdateProductRequest},
    },
    response::product::ProductResponse,
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count_by_category(&self, category_id: i32) -> Result<i64, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, req: &CreateProductRecord) -> Result<Product, RepositoryError>;
    async fn update_product(&self, req: &UpdateProductRecord) -> Result<Product, RepositoryError>;
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;

    /// Atomically applies `delta` (positive or negative) to the product's
    /// quantity. Returns `None` when the row is missing or the resulting
    /// quantity would drop below zero.
    async fn adjust_stock(&self, id: i32, delta: i32) -> Result<Option<Product>, RepositoryError>;
}

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn product_details(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn register_product(
        &self,
        name: &str,
        price: f64,
        category_id: i32,
        owner_user_id: i32,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(&self, req: &UpdateProductRequest)
    -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, id: i32) -> Result<(), ServiceError>;
}
