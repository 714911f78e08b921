//! 商品 Repository trait

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::Product;

/// 商品仓储接口
///
/// 列表查询不返回错误：查询失败时记录日志并返回空列表，调用方无法区分
/// “没有商品”与“查询失败”。单条查询与写操作则总是把错误交给调用方。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 查询全部商品，顺序由数据库决定
    async fn find_all(&self) -> Vec<Product>;

    /// 查询指定店铺的商品（区分大小写的精确匹配）
    async fn find_by_store(&self, store: &str) -> Vec<Product>;

    /// 新增商品，忽略 `product.id`
    async fn save(&self, product: &Product) -> AppResult<()>;

    /// 根据 ID 查找商品
    ///
    /// 记录不存在或无法解码时均返回 `AppError::NotFound`。
    async fn find_by_id(&self, id: i64) -> AppResult<Product>;

    /// 根据 ID 删除商品
    ///
    /// 先查询确认存在，不存在时返回 `AppError::NotFound` 且不执行删除。
    /// 查询与删除不在同一事务中。
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// 更新商品价格
    ///
    /// 不检查是否存在；ID 不存在时影响 0 行，仍返回成功。
    async fn update_price(&self, id: i64, new_price: f32) -> AppResult<()>;
}
