use crate::domain::{
    requests::user::{CreateUserRecord, UpdateUserRecord, UpdateUserRequest},
    response::user::UserResponse,
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    model::User,
};
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<User>, RepositoryError>;
}

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<User, RepositoryError>;
    async fn update_user(&self, req: &UpdateUserRecord) -> Result<User, RepositoryError>;
    async fn set_active(&self, id: i32, active: bool) -> Result<Option<User>, RepositoryError>;
}

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn get_user(&self, id: i32) -> Result<UserResponse, ServiceError>;
    async fn update_user(
        &self,
        id: i32,
        req: &UpdateUserRequest,
    ) -> Result<UserResponse, ServiceError>;
    async fn approve(
        &self,
        target_id: i32,
        acting_user_id: i32,
    ) -> Result<UserResponse, ServiceError>;
    async fn deactivate(
        &self,
        target_id: i32,
        acting_user_id: i32,
    ) -> Result<UserResponse, ServiceError>;
}
