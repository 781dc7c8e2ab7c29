use crate::{
    abstract_trait::{
        CategoryServiceTrait, DynCategoryCommandRepository, DynCategoryQueryRepository,
        DynProductQueryRepository,
    },
    domain::response::category::CategoryResponse,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info};

pub struct CategoryService {
    query: DynCategoryQueryRepository,
    command: DynCategoryCommandRepository,
    product_query: DynProductQueryRepository,
}

impl CategoryService {
    pub fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        product_query: DynProductQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            product_query,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    async fn list_categories(&self) -> Result<Vec<CategoryResponse>, ServiceError> {
        let categories = self.query.find_all().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    async fn create_category(&self, name: &str) -> Result<CategoryResponse, ServiceError> {
        info!("🏗️ Creating new category: {}", name);

        if self.query.find_by_name(name).await?.is_some() {
            return Err(ServiceError::Conflict("Category already registered".into()));
        }

        let category = self
            .command
            .create_category(name)
            .await
            .map_err(ServiceError::Repo)?;

        info!(
            "✅ Category created: {} (ID: {})",
            category.name, category.category_id
        );

        Ok(CategoryResponse::from(category))
    }

    async fn update_category(&self, id: i32, name: &str) -> Result<CategoryResponse, ServiceError> {
        info!("✏️ Updating category ID {}", id);

        if self.query.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        let category = self
            .command
            .update_category(id, name)
            .await
            .map_err(ServiceError::Repo)?;

        info!("✅ Category updated: {}", category.name);

        Ok(CategoryResponse::from(category))
    }

    async fn delete_category(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting category ID {}", id);

        if self.query.find_by_id(id).await?.is_none() {
            return Err(ServiceError::NotFound("Category not found".into()));
        }

        let products = self.product_query.count_by_category(id).await?;
        if products > 0 {
            error!(
                "❌ Category ID {} still referenced by {} products",
                id, products
            );
            return Err(ServiceError::Conflict(
                "Category has products associated with it".into(),
            ));
        }

        match self.command.delete_category(id).await {
            Ok(()) => {
                info!("✅ Category ID {} deleted", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                Err(ServiceError::NotFound("Category not found".into()))
            }
            Err(e) => Err(ServiceError::Repo(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testsupport::MemoryStore;
    use std::sync::Arc;

    fn make_service(store: &Arc<MemoryStore>) -> CategoryService {
        CategoryService::new(store.clone(), store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_create_category_rejects_duplicate_name() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        service.create_category("Drinks").await.unwrap();

        let err = service.create_category("Drinks").await.unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_category_with_products_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let user = store.seed_user("Owner", "owner@example.com", "11111111111", true);
        let category = store.seed_category("Drinks");
        store.seed_product("Cola", category.category_id, user.user_id, 0);

        let err = service
            .delete_category(category.category_id)
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_delete_empty_category_succeeds() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let category = store.seed_category("Drinks");

        service.delete_category(category.category_id).await.unwrap();

        assert!(service.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_category_fails() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        let err = service.update_category(42, "Snacks").await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_categories_sorted_by_name() {
        let store = MemoryStore::new();
        let service = make_service(&store);

        store.seed_category("Snacks");
        store.seed_category("Drinks");

        let names: Vec<String> = service
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Drinks".to_string(), "Snacks".to_string()]);
    }
}
