//! PostgreSQL repository implementation

use async_trait::async_trait;
use errors::{AppError, AppResult};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;

use super::rows::{ProductRow, collect_products};

/// 基于 products 表的商品仓储
///
/// 连接池由外部创建并注入，仓储本身不持有其他状态，也不负责关闭连接池。
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 查询全部商品，失败时返回错误
    pub async fn try_find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(collect_products(rows.iter().map(ProductRow::from_row)))
    }

    /// 查询指定店铺的商品，失败时返回错误
    pub async fn try_find_by_store(&self, store: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query("SELECT * FROM products WHERE store = $1")
            .bind(store)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to list products of store {}: {}", store, e))
            })?;

        Ok(collect_products(rows.iter().map(ProductRow::from_row)))
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Vec<Product> {
        self.try_find_all().await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to fetch products, returning empty list");
            Vec::new()
        })
    }

    async fn find_by_store(&self, store: &str) -> Vec<Product> {
        self.try_find_by_store(store).await.unwrap_or_else(|e| {
            error!(store, error = %e, "Failed to fetch products, returning empty list");
            Vec::new()
        })
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            "INSERT INTO products(name, price, discount, store) VALUES ($1, $2, $3, $4)",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.discount)
        .bind(&product.store)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(name = %product.name, store = %product.store, error = %e, "Failed to add product");
            AppError::database(format!("Failed to add product {}: {}", product.name, e))
        })?;

        info!(rows_affected = result.rows_affected(), "Product added");
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Product> {
        sqlx::query_as::<_, ProductRow>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map(Into::into)
            .map_err(|e| {
                debug!(id, error = %e, "Product lookup failed");
                AppError::not_found(format!("Failed to get product by id: {}", id))
            })
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        if self.find_by_id(id).await.is_err() {
            return Err(AppError::not_found(format!("Product not found: {}", id)));
        }

        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(id, error = %e, "Failed to delete product");
                AppError::database(format!("Failed to delete product {}: {}", id, e))
            })?;

        info!(id, "Product deleted");
        Ok(())
    }

    async fn update_price(&self, id: i64, new_price: f32) -> AppResult<()> {
        let result = sqlx::query("UPDATE products SET price = $1 WHERE id = $2")
            .bind(new_price)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(id, new_price, error = %e, "Failed to update product price");
                AppError::database(format!("Failed to update price of product {}: {}", id, e))
            })?;

        info!(
            id,
            new_price,
            rows_affected = result.rows_affected(),
            "Product price updated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapter_postgres::{PostgresConfig, create_lazy_pool};
    use std::time::Duration;

    /// 指向不可达地址的连接池，所有语句都会失败
    fn failing_repository() -> PostgresProductRepository {
        let config = PostgresConfig::from_components("127.0.0.1", 1, "productapp", "postgres")
            .with_password("postgres")
            .with_connect_timeout(Duration::from_millis(200));
        PostgresProductRepository::new(create_lazy_pool(&config))
    }

    #[tokio::test]
    async fn test_find_all_swallows_query_failure() {
        let repo = failing_repository();

        let err = repo.try_find_all().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(repo.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_store_swallows_query_failure() {
        let repo = failing_repository();

        let err = repo.try_find_by_store("ABC TECH").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(repo.find_by_store("Unknown Store").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_propagates_failure() {
        let repo = failing_repository();
        let product = Product::new("AirFryer", 3000.0, 22.0, "ABC TECH");

        let err = repo.save(&product).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.to_string().contains("AirFryer"));
    }

    #[tokio::test]
    async fn test_find_by_id_failure_is_not_found_with_id() {
        let repo = failing_repository();

        let err = repo.find_by_id(42).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("42"));
    }

    #[tokio::test]
    async fn test_delete_reports_not_found_when_lookup_fails() {
        let repo = failing_repository();

        let err = repo.delete_by_id(7).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: Product not found: 7");
    }

    #[tokio::test]
    async fn test_update_price_propagates_failure() {
        let repo = failing_repository();

        let err = repo.update_price(3, 9999.0).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.to_string().contains("product 3"));
    }
}
