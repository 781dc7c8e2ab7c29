use crate::domain::response::category::CategoryResponse;
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
}

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(&self, name: &str) -> Result<Category, RepositoryError>;
    async fn update_category(&self, id: i32, name: &str) -> Result<Category, RepositoryError>;
    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError>;
}

pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryServiceTrait {
    async fn list_categories(&self) -> Result<Vec<CategoryResponse>, ServiceError>;
    async fn create_category(&self, name: &str) -> Result<CategoryResponse, ServiceError>;
    async fn update_category(&self, id: i32, name: &str) -> Result<CategoryResponse, ServiceError>;
    async fn delete_category(&self, id: i32) -> Result<(), ServiceError>;
}
