use serde::Deserialize;

use crate::domain::sku::NewSku;
use crate::domain::taxonomy::TaxonomyPath;
use crate::forms::metadata::TaxonomyPathForm;
use crate::forms::upload::{UploadFormError, UploadFormResult, read_required_columns};

/// Column headers expected in a SKU CSV upload.
pub const SKU_COLUMNS: [&str; 6] = [
    "SKU",
    "NAME",
    "LOCATION",
    "DEPARTMENT",
    "CATEGORY",
    "SUBCATEGORY",
];

/// Exact-match filter for the SKU lookup.
pub type SkuLookupForm = TaxonomyPathForm;

#[derive(Debug, Clone, Deserialize)]
pub struct SkuItemForm {
    #[serde(rename = "SKU")]
    pub sku: i64,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "LOCATION")]
    pub location: String,
    #[serde(rename = "DEPARTMENT")]
    pub department: String,
    #[serde(rename = "CATEGORY")]
    pub category: String,
    #[serde(rename = "SUBCATEGORY")]
    pub subcategory: String,
}

impl From<SkuItemForm> for NewSku {
    fn from(form: SkuItemForm) -> Self {
        NewSku::new(
            form.sku,
            form.name,
            TaxonomyPath::new(form.location, form.department, form.category, form.subcategory),
        )
    }
}

/// Body of the SKU bulk replace. A missing `sku_data` key counts as an empty
/// list.
#[derive(Debug, Deserialize)]
pub struct UpdateSkuDataForm {
    #[serde(default)]
    pub sku_data: Vec<SkuItemForm>,
}

impl UpdateSkuDataForm {
    pub fn into_new_skus(self) -> Vec<NewSku> {
        self.sku_data.into_iter().map(NewSku::from).collect()
    }
}

/// CSV upload that replaces the whole SKU table.
#[derive(Debug)]
pub struct UploadSkuDataForm {
    /// Optional filename provided by the client.
    pub file_name: Option<String>,
    /// Raw CSV bytes received from the upload.
    pub bytes: Vec<u8>,
}

impl UploadSkuDataForm {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// Parse the uploaded CSV into catalog items.
    pub fn into_new_skus(self) -> UploadFormResult<Vec<NewSku>> {
        let rows = read_required_columns(self.bytes, &SKU_COLUMNS)?;

        let mut skus = Vec::with_capacity(rows.len());

        for row in rows {
            let mut values = row.values.into_iter();
            let mut next = || values.next().unwrap_or_default();

            let raw_sku = next();
            let sku = raw_sku
                .parse::<i64>()
                .map_err(|_| UploadFormError::InvalidSku {
                    row: row.row,
                    value: raw_sku.clone(),
                })?;
            let name = next();
            let path = TaxonomyPath::new(next(), next(), next(), next());

            skus.push(NewSku::new(sku, name, path));
        }

        Ok(skus)
    }
}
