use crate::domain::{requests::pagination::SortOrder, response::product::ProductResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStockService = Arc<dyn StockServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockServiceTrait {
    async fn list_stock(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn add_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError>;
    async fn remove_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError>;
}
