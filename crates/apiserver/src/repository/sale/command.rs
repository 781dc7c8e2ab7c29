use crate::{abstract_trait::SaleCommandRepositoryTrait, domain::requests::sale::CreateSaleRecord};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Product as ProductModel, Sale as SaleModel},
};
use tracing::{error, info, warn};

pub struct SaleCommandRepository {
    db: ConnectionPool,
}

impl SaleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for SaleCommandRepository {
    async fn create_sale(&self, req: &CreateSaleRecord) -> Result<SaleModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Row-lock the product for the whole check-insert-decrement
        // sequence. An early return drops the transaction, rolling back, so
        // a failed stock check never leaves an orphan sale row.
        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT * FROM products WHERE product_id = $1 FOR UPDATE
            "#,
        )
        .bind(req.product_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let product = match product {
            Some(product) => product,
            None => return Err(RepositoryError::NotFound),
        };

        if product.quantity < req.quantity {
            warn!(
                "⚠️ Insufficient stock for product ID {}: requested {}, available {}",
                product.product_id, req.quantity, product.quantity
            );
            return Err(RepositoryError::InsufficientStock(format!(
                "The stock has only {} units of product {}",
                product.quantity, product.name
            )));
        }

        let sale = sqlx::query_as::<_, SaleModel>(
            r#"
            INSERT INTO sales (product_id, quantity, price, user_id, created_at)
            VALUES ($1, $2, $3, $4, current_timestamp)
            RETURNING *
            "#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(req.price)
        .bind(req.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to insert sale: {:?}", err);
            RepositoryError::from(err)
        })?;

        let updated = sqlx::query(
            r#"
            UPDATE products
            SET quantity = quantity - $2,
                updated_at = current_timestamp
            WHERE product_id = $1 AND quantity >= $2
            "#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::InsufficientStock(format!(
                "The stock has only {} units of product {}",
                product.quantity, product.name
            )));
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Registered sale ID {} ({} units of product ID {})",
            sale.sale_id, sale.quantity, sale.product_id
        );
        Ok(sale)
    }

    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let sale = sqlx::query_as::<_, SaleModel>(
            r#"
            SELECT * FROM sales WHERE sale_id = $1 FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        let sale = match sale {
            Some(sale) => sale,
            None => return Err(RepositoryError::NotFound),
        };

        let restored = sqlx::query(
            r#"
            UPDATE products
            SET quantity = quantity + $2,
                updated_at = current_timestamp
            WHERE product_id = $1
            "#,
        )
        .bind(sale.product_id)
        .bind(sale.quantity)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        if restored.rows_affected() == 0 {
            return Err(RepositoryError::Custom(
                "Failed to restore product stock for the deleted sale".into(),
            ));
        }

        sqlx::query(
            r#"
            DELETE FROM sales WHERE sale_id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(RepositoryError::from)?;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Deleted sale ID {} and returned {} units to product ID {}",
            id, sale.quantity, sale.product_id
        );
        Ok(())
    }
}
