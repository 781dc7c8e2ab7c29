use crate::{abstract_trait::ProductQueryRepositoryTrait, domain::requests::pagination::SortOrder};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Product as ProductModel};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT * FROM products WHERE product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT * FROM products WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // ORDER BY direction cannot be bound as a parameter; SortOrder only
        // ever renders to ASC or DESC.
        let sql = format!(
            r#"
            SELECT * FROM products
            ORDER BY created_at {order}
            LIMIT $1 OFFSET $2
            "#,
            order = order.as_sql()
        );

        let products = sqlx::query_as::<_, ProductModel>(&sql)
            .bind(take)
            .bind(skip)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(products)
    }

    async fn count_by_category(&self, category_id: i32) -> Result<i64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(count)
    }
}
