use crate::{
    abstract_trait::{
        DynCategoryQueryRepository, DynProductCommandRepository, DynProductQueryRepository,
        ProductServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRecord, UpdateProductRecord, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

pub struct ProductService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    category_query: DynCategoryQueryRepository,
}

impl ProductService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        category_query: DynCategoryQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            category_query,
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn product_details(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = match self.query.find_by_id(id).await? {
            Some(product) => product,
            None => return Err(ServiceError::NotFound("Product not found".into())),
        };

        Ok(ProductResponse::from(product))
    }

    async fn register_product(
        &self,
        name: &str,
        price: f64,
        category_id: i32,
        owner_user_id: i32,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Registering new product: {}", name);

        if self.query.find_by_name(name).await?.is_some() {
            return Err(ServiceError::Conflict("Product already registered".into()));
        }

        if self.category_query.find_by_id(category_id).await?.is_none() {
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        let record = CreateProductRecord {
            name: name.to_string(),
            price,
            category_id,
            user_id: owner_user_id,
        };

        let product = self
            .command
            .create_product(&record)
            .await
            .map_err(ServiceError::Repo)?;

        info!(
            "✅ Product registered: {} (ID: {})",
            product.name, product.product_id
        );

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product ID {}", req.id);

        let existing = match self.query.find_by_id(req.id).await? {
            Some(product) => product,
            None => return Err(ServiceError::NotFound("Product not found".into())),
        };

        let mut new_name = existing.name.clone();

        if let Some(name) = &req.name {
            if *name != existing.name {
                if self.query.find_by_name(name).await?.is_some() {
                    return Err(ServiceError::Conflict("Product already registered".into()));
                }
                new_name = name.clone();
            }
        }

        let category_id = req.category_id.unwrap_or(existing.category_id);

        if category_id != existing.category_id
            && self.category_query.find_by_id(category_id).await?.is_none()
        {
            error!("❌ Category ID {} not found", category_id);
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        let record = UpdateProductRecord {
            product_id: req.id,
            name: new_name,
            price: req.price.unwrap_or(existing.price),
            category_id,
        };

        let product = self
            .command
            .update_product(&record)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Product updated: {}", product.name);

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID {}", id);

        let product = match self.query.find_by_id(id).await? {
            Some(product) => product,
            None => return Err(ServiceError::NotFound("Product not found".into())),
        };

        if product.quantity > 0 {
            error!(
                "❌ Product ID {} still has {} stock units",
                id, product.quantity
            );
            return Err(ServiceError::Conflict(
                "Product still has stock units".into(),
            ));
        }

        self.command
            .delete_product(id)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Product ID {} deleted", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testsupport::MemoryStore;
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> ProductService {
        ProductService::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_register_product_starts_with_zero_stock() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");

        let product = service
            .register_product("Cola", 4.5, category.category_id, user.user_id)
            .await
            .unwrap();

        assert_eq!(product.quantity, 0);
        assert_eq!(product.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_register_product_rejects_duplicate_name() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        store.seed_product("Cola", category.category_id, user.user_id, 0);

        let err = service
            .register_product("Cola", 4.5, category.category_id, user.user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_product_requires_existing_category() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);

        let err = service
            .register_product("Cola", 4.5, 999, user.user_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_product_falls_back_to_stored_values() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        let product = store.seed_product("Cola", category.category_id, user.user_id, 0);

        let updated = service
            .update_product(&UpdateProductRequest {
                id: product.product_id,
                name: None,
                price: Some(7.25),
                category_id: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.name, "Cola");
        assert_eq!(updated.price, 7.25);
        assert_eq!(updated.category_id, category.category_id);
    }

    #[tokio::test]
    async fn test_update_product_rejects_unknown_category() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        let product = store.seed_product("Cola", category.category_id, user.user_id, 0);

        let err = service
            .update_product(&UpdateProductRequest {
                id: product.product_id,
                name: None,
                price: None,
                category_id: Some(999),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_product_with_stock_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        let product = store.seed_product("Cola", category.category_id, user.user_id, 5);

        let err = service.delete_product(product.product_id).await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(store.product_quantity(product.product_id), 5);
    }

    #[tokio::test]
    async fn test_delete_product_without_stock_succeeds() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        let product = store.seed_product("Cola", category.category_id, user.user_id, 0);

        service.delete_product(product.product_id).await.unwrap();

        let err = service.product_details(product.product_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
