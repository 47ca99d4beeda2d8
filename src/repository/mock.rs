use mockall::mock;

use super::{MetadataReader, MetadataWriter, SkuReader, SkuWriter};
use crate::domain::{
    metadata::{DepartmentKey, MetadataEntry, NewMetadataEntry, UpdateDepartment},
    sku::{NewSku, Sku},
    taxonomy::TaxonomyPath,
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub MetadataReader {}

    impl MetadataReader for MetadataReader {
        fn list_locations(&self) -> RepositoryResult<Vec<String>>;
        fn list_departments(&self, location: &str) -> RepositoryResult<Vec<String>>;
        fn list_categories(&self) -> RepositoryResult<Vec<String>>;
        fn list_subcategories(&self) -> RepositoryResult<Vec<String>>;
    }
}

mock! {
    pub MetadataWriter {}

    impl MetadataWriter for MetadataWriter {
        fn replace_metadata(&self, entries: &[NewMetadataEntry]) -> RepositoryResult<usize>;
        fn create_metadata_entry(&self, entry: &NewMetadataEntry) -> RepositoryResult<MetadataEntry>;
        fn update_department(&self, key: &DepartmentKey, updates: &UpdateDepartment) -> RepositoryResult<MetadataEntry>;
        fn delete_department(&self, key: &DepartmentKey) -> RepositoryResult<()>;
    }
}

mock! {
    pub SkuReader {}

    impl SkuReader for SkuReader {
        fn list_skus_by_path(&self, path: &TaxonomyPath) -> RepositoryResult<Vec<Sku>>;
    }
}

mock! {
    pub SkuWriter {}

    impl SkuWriter for SkuWriter {
        fn replace_skus(&self, items: &[NewSku]) -> RepositoryResult<usize>;
    }
}
