use crate::{abstract_trait::SaleQueryRepositoryTrait, domain::requests::pagination::SortOrder};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Sale as SaleModel, SaleWithRelations},
};

#[derive(Clone)]
pub struct SaleQueryRepository {
    db: ConnectionPool,
}

impl SaleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleQueryRepositoryTrait for SaleQueryRepository {
    async fn find_all(
        &self,
        take: i64,
        skip: i64,
        order: SortOrder,
    ) -> Result<Vec<SaleWithRelations>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            SELECT s.sale_id,
                   s.quantity,
                   s.price,
                   s.created_at,
                   p.product_id,
                   p.name AS product_name,
                   p.price AS product_price,
                   u.user_id,
                   u.name AS user_name
            FROM sales s
            JOIN products p ON p.product_id = s.product_id
            JOIN users u ON u.user_id = s.user_id
            ORDER BY s.created_at {order}
            LIMIT $1 OFFSET $2
            "#,
            order = order.as_sql()
        );

        let sales = sqlx::query_as::<_, SaleWithRelations>(&sql)
            .bind(take)
            .bind(skip)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(sales)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SaleModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT * FROM sales WHERE sale_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
