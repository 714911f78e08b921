//! PostgreSQL 连接管理

use errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::PostgresConfig;

fn pool_options(config: &PostgresConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
}

/// 创建 PostgreSQL 连接池
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let pool = pool_options(config)
        .connect_with(config.connect_options())
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))?;

    info!(
        url = %config.connection_url(),
        max_connections = config.pool_max,
        "PostgreSQL connection pool created"
    );
    Ok(pool)
}

/// 创建延迟连接的连接池（首次使用时才建立连接）
pub fn create_lazy_pool(config: &PostgresConfig) -> PgPool {
    pool_options(config).connect_lazy_with(config.connect_options())
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}

/// 连接池状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

/// 获取连接池状态
pub fn pool_status(pool: &PgPool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle() as u32;
    PoolStatus {
        size,
        idle,
        active: size.saturating_sub(idle),
    }
}
