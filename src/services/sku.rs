use crate::domain::taxonomy::TaxonomyPath;
use crate::forms::sku::{SkuLookupForm, UpdateSkuDataForm, UploadSkuDataForm};
use crate::repository::{SkuReader, SkuWriter};
use crate::services::{ServiceError, ServiceResult};

/// Replaces the whole catalog with the items in `form`.
pub fn replace_sku_data<R>(repo: &R, form: UpdateSkuDataForm) -> ServiceResult<usize>
where
    R: SkuWriter + ?Sized,
{
    let items = form.into_new_skus();

    let inserted = repo.replace_skus(&items).map_err(ServiceError::from)?;

    log::info!("Replaced SKU data with {inserted} rows");
    Ok(inserted)
}

/// Replaces the whole catalog with the rows of an uploaded CSV.
pub fn upload_sku_data<R>(repo: &R, form: UploadSkuDataForm) -> ServiceResult<usize>
where
    R: SkuWriter + ?Sized,
{
    let file_name = form.file_name.clone().unwrap_or_else(|| "<unnamed>".into());
    let items = form.into_new_skus()?;

    let inserted = repo.replace_skus(&items).map_err(ServiceError::from)?;

    log::info!("Replaced SKU data with {inserted} rows from {file_name}");
    Ok(inserted)
}

/// SKU codes of every item filed under exactly the requested path.
pub fn find_skus<R>(repo: &R, form: SkuLookupForm) -> ServiceResult<Vec<i64>>
where
    R: SkuReader + ?Sized,
{
    let path = TaxonomyPath::from(form);

    let items = repo.list_skus_by_path(&path).map_err(ServiceError::from)?;

    Ok(items.into_iter().map(|item| item.sku).collect())
}
