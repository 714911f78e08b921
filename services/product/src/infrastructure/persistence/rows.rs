//! 数据库行映射结构

use sqlx::FromRow;
use tracing::warn;

use crate::domain::entities::Product;

/// 商品数据库行（products 表的五列）
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f32,
    pub discount: f32,
    pub store: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            price: row.price,
            discount: row.discount,
            store: row.store,
        }
    }
}

/// 将逐行解码的结果收集为商品列表
///
/// 无法解码的行记录告警后跳过，其余行照常返回。
pub fn collect_products<I>(rows: I) -> Vec<Product>
where
    I: IntoIterator<Item = Result<ProductRow, sqlx::Error>>,
{
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match row {
            Ok(row) => Some(row.into()),
            Err(e) => {
                warn!(row = index, error = %e, "Skipping product row that failed to decode");
                None
            }
        })
        .collect()
}
