//! Domain layer

pub mod entities;
pub mod repositories;

pub use entities::Product;
pub use repositories::ProductRepository;
