//! product-service - 商品数据访问层

pub mod domain;
pub mod infrastructure;
