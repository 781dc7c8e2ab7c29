use crate::{
    abstract_trait::{DynSaleCommandRepository, DynSaleQueryRepository, SaleServiceTrait},
    domain::{
        requests::{pagination::SortOrder, sale::CreateSaleRecord},
        response::sale::{SaleRecordResponse, SaleResponse},
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

pub struct SaleService {
    query: DynSaleQueryRepository,
    command: DynSaleCommandRepository,
}

impl SaleService {
    pub fn new(query: DynSaleQueryRepository, command: DynSaleCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl SaleServiceTrait for SaleService {
    async fn list_sales(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.query.find_all(take, skip, order).await?;

        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn register_sale(
        &self,
        product_id: i32,
        quantity: i32,
        price: f64,
        user_id: i32,
    ) -> Result<SaleRecordResponse, ServiceError> {
        info!(
            "🧾 Registering sale: {} units of product ID {} by user ID {}",
            quantity, product_id, user_id
        );

        let record = CreateSaleRecord {
            product_id,
            quantity,
            price,
            user_id,
        };

        let sale = match self.command.create_sale(&record).await {
            Ok(sale) => sale,
            Err(RepositoryError::NotFound) => {
                error!("❌ Sale rejected, product ID {} not found", product_id);
                return Err(ServiceError::NotFound("Product not found".into()));
            }
            Err(RepositoryError::InsufficientStock(msg)) => {
                error!("❌ Sale rejected: {}", msg);
                return Err(ServiceError::InsufficientStock(msg));
            }
            Err(e) => return Err(ServiceError::Repo(e)),
        };

        info!(
            "✅ Sale registered: ID {} ({} units of product ID {})",
            sale.sale_id, sale.quantity, sale.product_id
        );

        Ok(SaleRecordResponse::from(sale))
    }

    async fn delete_sale(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting sale ID {}", id);

        match self.command.delete_sale(id).await {
            Ok(()) => {
                info!("✅ Sale ID {} deleted", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound("Sale not found".into())),
            Err(e) => Err(ServiceError::Repo(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testsupport::MemoryStore;
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> SaleService {
        SaleService::new(store.clone(), store.clone())
    }

    fn seed(store: &Arc<MemoryStore>, quantity: i32) -> (i32, i32) {
        let user = store.seed_user("Seller", "seller@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        let product = store.seed_product("Cola", category.category_id, user.user_id, quantity);
        (product.product_id, user.user_id)
    }

    #[tokio::test]
    async fn test_register_sale_decrements_stock() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let (product_id, user_id) = seed(&store, 10);

        let sale = service
            .register_sale(product_id, 4, 18.0, user_id)
            .await
            .unwrap();

        assert_eq!(sale.quantity, 4);
        assert_eq!(store.product_quantity(product_id), 6);
    }

    #[tokio::test]
    async fn test_register_sale_insufficient_stock_reports_available() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let (product_id, user_id) = seed(&store, 10);

        service
            .register_sale(product_id, 4, 18.0, user_id)
            .await
            .unwrap();

        let err = service
            .register_sale(product_id, 10, 45.0, user_id)
            .await
            .unwrap_err();

        match err {
            ServiceError::InsufficientStock(msg) => {
                assert!(msg.contains('6'));
                assert!(msg.contains("Cola"));
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }

        // A failed sale must leave the stock untouched and no orphan row.
        assert_eq!(store.product_quantity(product_id), 6);
        assert_eq!(store.sales.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_sale_unknown_product_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let (_, user_id) = seed(&store, 10);

        let err = service
            .register_sale(999, 1, 4.5, user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_sale_restores_stock() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let (product_id, user_id) = seed(&store, 10);

        let sale = service
            .register_sale(product_id, 4, 18.0, user_id)
            .await
            .unwrap();
        assert_eq!(store.product_quantity(product_id), 6);

        service.delete_sale(sale.id).await.unwrap();

        assert_eq!(store.product_quantity(product_id), 10);
        assert!(store.sales.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_sale_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let err = service.delete_sale(42).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_sales_nests_product_and_user() {
        let store = MemoryStore::new();
        let service = make_service(&store);
        let (product_id, user_id) = seed(&store, 10);

        service
            .register_sale(product_id, 2, 9.0, user_id)
            .await
            .unwrap();
        service
            .register_sale(product_id, 3, 13.5, user_id)
            .await
            .unwrap();

        let sales = service.list_sales(20, 0, SortOrder::Desc).await.unwrap();

        assert_eq!(sales.len(), 2);
        // Default order is newest first.
        assert_eq!(sales[0].quantity, 3);
        assert_eq!(sales[0].product.name, "Cola");
        assert_eq!(sales[0].user.name, "Seller");
    }
}
