//! 商品实体

use serde::{Deserialize, Serialize};

/// 商品
///
/// 返回给调用方的是与存储断开的快照，修改它不会影响数据库。
/// `id` 由数据库在插入时生成，`0` 表示尚未分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f32,
    /// 折扣，单位未定义，按原值存取
    pub discount: f32,
    /// 所属店铺名称
    pub store: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: f32,
        discount: f32,
        store: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            discount,
            store: store.into(),
        }
    }

    /// 是否已由数据库分配 ID
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
