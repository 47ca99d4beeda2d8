pub mod metadata;
pub mod sku;
