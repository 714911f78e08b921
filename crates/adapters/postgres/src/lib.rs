//! adapter-postgres - PostgreSQL 适配器

mod config;
mod connection;

pub use self::config::*;
pub use self::connection::*;
