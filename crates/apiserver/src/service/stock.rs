use crate::{
    abstract_trait::{DynProductCommandRepository, DynProductQueryRepository, StockServiceTrait},
    domain::{requests::pagination::SortOrder, response::product::ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

pub struct StockService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl StockService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    async fn list_stock(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all(take, skip, order).await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn add_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError> {
        info!("📈 Adding {} units to product ID {}", quantity, id);

        match self.command.adjust_stock(id, quantity).await? {
            Some(product) => {
                info!(
                    "✅ Stock increased for product ID {} (new quantity: {})",
                    product.product_id, product.quantity
                );
                Ok(ProductResponse::from(product))
            }
            None => match self.query.find_by_id(id).await? {
                None => Err(ServiceError::NotFound("Product not found".into())),
                // Unreachable while the payload enforces a positive amount;
                // kept so a negative delta can never drive stock below zero.
                Some(_) => Err(ServiceError::Validation(vec![
                    "Resulting stock cannot be negative".into(),
                ])),
            },
        }
    }

    async fn remove_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError> {
        info!("📉 Removing {} units from product ID {}", quantity, id);

        match self.command.adjust_stock(id, -quantity).await? {
            Some(product) => {
                info!(
                    "✅ Stock decreased for product ID {} (new quantity: {})",
                    product.product_id, product.quantity
                );
                Ok(ProductResponse::from(product))
            }
            None => match self.query.find_by_id(id).await? {
                None => Err(ServiceError::NotFound("Product not found".into())),
                Some(product) => {
                    error!(
                        "❌ Insufficient stock for product ID {}: requested {}, available {}",
                        id, quantity, product.quantity
                    );
                    Err(ServiceError::InsufficientStock(format!(
                        "The stock has only {} units of product {}",
                        product.quantity, product.name
                    )))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testsupport::MemoryStore;
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> StockService {
        StockService::new(store.clone(), store.clone())
    }

    fn seed(store: &Arc<MemoryStore>, quantity: i32) -> i32 {
        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        store
            .seed_product("Cola", category.category_id, user.user_id, quantity)
            .product_id
    }

    #[tokio::test]
    async fn test_add_then_remove_restores_quantity() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let product_id = seed(&store, 3);

        service.add_stock(product_id, 5).await.unwrap();
        let product = service.remove_stock(product_id, 5).await.unwrap();

        assert_eq!(product.quantity, 3);
    }

    #[tokio::test]
    async fn test_remove_more_than_available_fails_and_keeps_quantity() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let product_id = seed(&store, 4);

        let err = service.remove_stock(product_id, 10).await.unwrap_err();

        match err {
            ServiceError::InsufficientStock(msg) => {
                assert!(msg.contains('4'));
                assert!(msg.contains("Cola"));
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(store.product_quantity(product_id), 4);
    }

    #[tokio::test]
    async fn test_adjust_missing_product_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let add = service.add_stock(999, 1).await.unwrap_err();
        let remove = service.remove_stock(999, 1).await.unwrap_err();

        assert!(matches!(add, ServiceError::NotFound(_)));
        assert!(matches!(remove, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_stock_pages_products() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        for name in ["Cola", "Guarana", "Water"] {
            store.seed_product(name, category.category_id, user.user_id, 1);
        }

        let page = service.list_stock(2, 1, SortOrder::Asc).await.unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Guarana");
        assert_eq!(page[1].name, "Water");
    }
}
