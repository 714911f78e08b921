//! product-service - 启动入口
//!
//! 加载配置、初始化日志与连接池，并输出按店铺汇总的商品目录。

use std::collections::BTreeMap;

use adapter_postgres::{PostgresConfig, check_connection, create_pool, pool_status};
use config::AppConfig;
use tracing::info;

use product_service::domain::ProductRepository;
use product_service::infrastructure::persistence::PostgresProductRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir)?;
    telemetry::init_from_config(&config.telemetry);
    info!(app = %config.app_name, env = %config.app_env, "Starting product-service");

    let pg_config = PostgresConfig::from_database_config(&config.database)
        .with_application_name(&config.app_name);
    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;

    let repository = PostgresProductRepository::new(pool.clone());
    let products = repository.find_all().await;

    let mut per_store: BTreeMap<&str, usize> = BTreeMap::new();
    for product in &products {
        *per_store.entry(product.store.as_str()).or_default() += 1;
    }
    for (store, count) in &per_store {
        info!(store, count, "Store catalogue");
    }

    let status = pool_status(&pool);
    info!(
        total = products.len(),
        pool_size = status.size,
        pool_idle = status.idle,
        "Catalogue loaded"
    );

    pool.close().await;
    Ok(())
}
