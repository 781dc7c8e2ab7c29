use crate::{
    abstract_trait::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRecord, UpdateProductRecord},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Product as ProductModel};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRecord,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // New products always start with zero stock; units only enter
        // through the stock workflow.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, price, category_id, quantity, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, 0, $4, current_timestamp, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(req.price)
        .bind(req.category_id)
        .bind(req.user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            product.product_id, product.name
        );
        Ok(product)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRecord,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET name = $2,
                price = $3,
                category_id = $4,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING *
            "#,
        )
        .bind(req.product_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.category_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", req.product_id, err);
            RepositoryError::from(err)
        })?;

        info!("🔄 Updated product ID {}", product.product_id);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM products WHERE product_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to delete product ID {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Product ID {} deleted", id);
        Ok(())
    }

    async fn adjust_stock(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // Single conditional update so concurrent adjustments cannot lose
        // writes or drive the quantity negative. Zero rows means the product
        // is missing or the guard failed; the caller distinguishes the two.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET quantity = quantity + $2,
                updated_at = current_timestamp
            WHERE product_id = $1 AND quantity + $2 >= 0
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to adjust stock for product {}: {:?}", id, err);
            RepositoryError::from(err)
        })?;

        if let Some(product) = &product {
            info!(
                "✅ Adjusted stock for product ID {} (new quantity: {})",
                product.product_id, product.quantity
            );
        }

        Ok(product)
    }
}
