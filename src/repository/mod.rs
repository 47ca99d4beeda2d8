use crate::db::{DbConnection, DbPool};
use crate::domain::metadata::{DepartmentKey, MetadataEntry, NewMetadataEntry, UpdateDepartment};
use crate::domain::sku::{NewSku, Sku};
use crate::domain::taxonomy::TaxonomyPath;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod metadata;
pub mod sku;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over taxonomy rows.
///
/// Listings return the distinct non-null values of one column, sorted.
pub trait MetadataReader {
    fn list_locations(&self) -> RepositoryResult<Vec<String>>;
    fn list_departments(&self, location: &str) -> RepositoryResult<Vec<String>>;
    fn list_categories(&self) -> RepositoryResult<Vec<String>>;
    fn list_subcategories(&self) -> RepositoryResult<Vec<String>>;
}

/// Write operations over taxonomy rows.
pub trait MetadataWriter {
    /// Delete every row and insert `entries` in one transaction.
    fn replace_metadata(&self, entries: &[NewMetadataEntry]) -> RepositoryResult<usize>;
    fn create_metadata_entry(&self, entry: &NewMetadataEntry) -> RepositoryResult<MetadataEntry>;
    /// Patch the first row matching `key`.
    fn update_department(
        &self,
        key: &DepartmentKey,
        updates: &UpdateDepartment,
    ) -> RepositoryResult<MetadataEntry>;
    /// Delete the first row matching `key`.
    fn delete_department(&self, key: &DepartmentKey) -> RepositoryResult<()>;
}

/// Read-only operations over catalog items.
pub trait SkuReader {
    fn list_skus_by_path(&self, path: &TaxonomyPath) -> RepositoryResult<Vec<Sku>>;
}

/// Write operations over catalog items.
pub trait SkuWriter {
    /// Delete every item and insert `items` in one transaction.
    fn replace_skus(&self, items: &[NewSku]) -> RepositoryResult<usize>;
}
