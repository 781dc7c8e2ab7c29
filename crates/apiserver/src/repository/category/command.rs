use crate::abstract_trait::CategoryCommandRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Category as CategoryModel};
use tracing::{error, info};

pub struct CategoryCommandRepository {
    db: ConnectionPool,
}

impl CategoryCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryCommandRepositoryTrait for CategoryCommandRepository {
    async fn create_category(&self, name: &str) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            INSERT INTO categories (name, created_at, updated_at)
            VALUES ($1, current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create category {}: {:?}", name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created category ID {} ({})",
            category.category_id, category.name
        );
        Ok(category)
    }

    async fn update_category(&self, id: i32, name: &str) -> Result<CategoryModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let category = sqlx::query_as::<_, CategoryModel>(
            r#"
            UPDATE categories
            SET name = $2,
                updated_at = current_timestamp
            WHERE category_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated category ID {}", category.category_id);
        Ok(category)
    }

    async fn delete_category(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM categories WHERE category_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete category ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Category ID {} deleted", id);
        Ok(())
    }
}
