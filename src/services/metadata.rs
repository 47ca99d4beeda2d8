use crate::domain::metadata::MetadataEntry;
use crate::forms::metadata::{
    AddCategoryForm, AddDepartmentForm, AddLocationForm, AddSubcategoryForm,
    DeleteDepartmentForm, EditDepartmentForm, UpdateMetadataForm, UploadMetadataForm,
};
use crate::repository::{MetadataReader, MetadataWriter};
use crate::services::{ServiceError, ServiceResult};

/// Replaces the whole taxonomy table with the rows in `form`.
pub fn replace_metadata<R>(repo: &R, form: UpdateMetadataForm) -> ServiceResult<usize>
where
    R: MetadataWriter + ?Sized,
{
    let entries = form.into_new_entries();

    let inserted = repo
        .replace_metadata(&entries)
        .map_err(ServiceError::from)?;

    log::info!("Replaced metadata with {inserted} rows");
    Ok(inserted)
}

/// Replaces the whole taxonomy table with the rows of an uploaded CSV.
pub fn upload_metadata<R>(repo: &R, form: UploadMetadataForm) -> ServiceResult<usize>
where
    R: MetadataWriter + ?Sized,
{
    let file_name = form.file_name.clone().unwrap_or_else(|| "<unnamed>".into());
    let entries = form.into_new_entries()?;

    let inserted = repo
        .replace_metadata(&entries)
        .map_err(ServiceError::from)?;

    log::info!("Replaced metadata with {inserted} rows from {file_name}");
    Ok(inserted)
}

pub fn list_locations<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: MetadataReader + ?Sized,
{
    repo.list_locations().map_err(ServiceError::from)
}

/// Appends a location-only row.
pub fn create_location<R>(repo: &R, form: AddLocationForm) -> ServiceResult<MetadataEntry>
where
    R: MetadataWriter + ?Sized,
{
    repo.create_metadata_entry(&form.into_new_entry())
        .map_err(ServiceError::from)
}

/// Distinct departments recorded under `location`.
pub fn list_departments<R>(repo: &R, location: &str) -> ServiceResult<Vec<String>>
where
    R: MetadataReader + ?Sized,
{
    repo.list_departments(location).map_err(ServiceError::from)
}

/// Appends a location + department row. The location comes from the body.
pub fn create_department<R>(repo: &R, form: AddDepartmentForm) -> ServiceResult<MetadataEntry>
where
    R: MetadataWriter + ?Sized,
{
    repo.create_metadata_entry(&form.into_new_entry())
        .map_err(ServiceError::from)
}

/// Sets category/subcategory on the first row matching the department key.
pub fn modify_department<R>(repo: &R, form: EditDepartmentForm) -> ServiceResult<MetadataEntry>
where
    R: MetadataWriter + ?Sized,
{
    let (key, update) = form.into_parts();

    repo.update_department(&key, &update)
        .map_err(ServiceError::from)
}

/// Deletes the first row matching the department key.
pub fn remove_department<R>(repo: &R, form: DeleteDepartmentForm) -> ServiceResult<()>
where
    R: MetadataWriter + ?Sized,
{
    repo.delete_department(&form.into_key())
        .map_err(ServiceError::from)
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: MetadataReader + ?Sized,
{
    repo.list_categories().map_err(ServiceError::from)
}

pub fn create_category<R>(repo: &R, form: AddCategoryForm) -> ServiceResult<MetadataEntry>
where
    R: MetadataWriter + ?Sized,
{
    repo.create_metadata_entry(&form.into_new_entry())
        .map_err(ServiceError::from)
}

pub fn list_subcategories<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: MetadataReader + ?Sized,
{
    repo.list_subcategories().map_err(ServiceError::from)
}

pub fn create_subcategory<R>(repo: &R, form: AddSubcategoryForm) -> ServiceResult<MetadataEntry>
where
    R: MetadataWriter + ?Sized,
{
    repo.create_metadata_entry(&form.into_new_entry())
        .map_err(ServiceError::from)
}
