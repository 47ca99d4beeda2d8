pub mod metadata;
pub mod sku;
pub mod taxonomy;
