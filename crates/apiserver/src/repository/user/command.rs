use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    domain::requests::user::{CreateUserRecord, UpdateUserRecord},
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    model::{ROLE_ADMIN, ROLE_STANDARD, User as UserModel},
};
use tracing::{error, info};

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<UserModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Admin bootstrap: the very first account is created active with the
        // admin role, everyone after it waits for approval. The count and
        // insert share one transaction.
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;

        let (role, active) = if count == 0 {
            (ROLE_ADMIN, true)
        } else {
            (ROLE_STANDARD, false)
        };

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (name, email, cpf, password, role, active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.cpf)
        .bind(&req.password)
        .bind(role)
        .bind(active)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to create user {}: {:?}", req.email, err);
            RepositoryError::from(err)
        })?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!("✅ Created user ID {} ({})", user.user_id, user.email);
        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRecord) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET name = $2,
                email = $3,
                password = $4,
                updated_at = current_timestamp
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update user ID {}: {:?}", req.user_id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated user ID {}", user.user_id);
        Ok(user)
    }

    async fn set_active(
        &self,
        id: i32,
        active: bool,
    ) -> Result<Option<UserModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET active = $2,
                updated_at = current_timestamp
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(active)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        if let Some(user) = &user {
            info!("✅ User ID {} active flag set to {}", user.user_id, active);
        }

        Ok(user)
    }
}
