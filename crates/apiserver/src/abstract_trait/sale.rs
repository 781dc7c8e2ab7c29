use crate::domain::{
    requests::{pagination::SortOrder, sale::CreateSaleRecord},
    response::sale::{SaleRecordResponse, SaleResponse},
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::{Sale, SaleWithRelations},
};
use std::sync::Arc;

pub type DynSaleQueryRepository = Arc<dyn SaleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleQueryRepositoryTrait {
    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<SaleWithRelations>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError>;
}

pub type DynSaleCommandRepository = Arc<dyn SaleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SaleCommandRepositoryTrait {
    /// Validates stock and inserts the sale inside a single transaction,
    /// decrementing the product quantity. No sale row survives a failed
    /// stock check.
    async fn create_sale(&self, req: &CreateSaleRecord) -> Result<Sale, RepositoryError>;

    /// Deletes a sale and returns the sold quantity to the product's stock
    /// inside a single transaction.
    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynSaleService = Arc<dyn SaleServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleServiceTrait {
    async fn list_sales(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<SaleResponse>, ServiceError>;
    async fn register_sale(
        &self,
        product_id: i32,
        quantity: i32,
        price: f64,
        user_id: i32,
    ) -> Result<SaleRecordResponse, ServiceError>;
    async fn delete_sale(&self, id: i32) -> Result<(), ServiceError>;
}
