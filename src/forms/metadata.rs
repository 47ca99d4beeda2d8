use serde::{Deserialize, Deserializer};

use crate::domain::metadata::{DepartmentKey, NewMetadataEntry, UpdateDepartment};
use crate::domain::taxonomy::TaxonomyPath;
use crate::forms::upload::{UploadFormResult, read_required_columns};

/// Column headers expected in a metadata CSV upload.
pub const METADATA_COLUMNS: [&str; 4] = ["Location", "Department", "Category", "SubCategory"];

/// Four-level taxonomy path keyed the way spreadsheet exports name it.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonomyPathForm {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "SubCategory")]
    pub subcategory: String,
}

impl From<TaxonomyPathForm> for TaxonomyPath {
    fn from(form: TaxonomyPathForm) -> Self {
        TaxonomyPath::new(form.location, form.department, form.category, form.subcategory)
    }
}

/// Body of the metadata bulk replace. A missing `metadata` key counts as an
/// empty list.
#[derive(Debug, Deserialize)]
pub struct UpdateMetadataForm {
    #[serde(default)]
    pub metadata: Vec<TaxonomyPathForm>,
}

impl UpdateMetadataForm {
    pub fn into_new_entries(self) -> Vec<NewMetadataEntry> {
        self.metadata
            .into_iter()
            .map(|item| NewMetadataEntry::from(TaxonomyPath::from(item)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct AddLocationForm {
    pub location: String,
}

impl AddLocationForm {
    pub fn into_new_entry(self) -> NewMetadataEntry {
        NewMetadataEntry::new(self.location)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddDepartmentForm {
    pub location: String,
    pub department: String,
}

impl AddDepartmentForm {
    pub fn into_new_entry(self) -> NewMetadataEntry {
        NewMetadataEntry::new(self.location).with_department(self.department)
    }
}

/// Body of a department update. Absent fields keep their stored value, an
/// explicit `null` clears it.
#[derive(Debug, Deserialize)]
pub struct EditDepartmentForm {
    pub location: String,
    pub department: String,
    #[serde(default, deserialize_with = "present_field")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_field")]
    pub subcategory: Option<Option<String>>,
}

/// Marks a key that appears in the body, even with a `null` value.
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl EditDepartmentForm {
    pub fn into_parts(self) -> (DepartmentKey, UpdateDepartment) {
        (
            DepartmentKey::new(self.location, self.department),
            UpdateDepartment::new(self.category, self.subcategory),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteDepartmentForm {
    pub location: String,
    pub department: String,
}

impl DeleteDepartmentForm {
    pub fn into_key(self) -> DepartmentKey {
        DepartmentKey::new(self.location, self.department)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCategoryForm {
    pub location: String,
    pub department: String,
    pub category: String,
}

impl AddCategoryForm {
    pub fn into_new_entry(self) -> NewMetadataEntry {
        NewMetadataEntry::new(self.location)
            .with_department(self.department)
            .with_category(self.category)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddSubcategoryForm {
    pub location: String,
    pub department: String,
    pub category: String,
    pub subcategory: String,
}

impl AddSubcategoryForm {
    pub fn into_new_entry(self) -> NewMetadataEntry {
        NewMetadataEntry::new(self.location)
            .with_department(self.department)
            .with_category(self.category)
            .with_subcategory(self.subcategory)
    }
}

/// CSV upload that replaces the whole metadata table.
#[derive(Debug)]
pub struct UploadMetadataForm {
    /// Optional filename provided by the client.
    pub file_name: Option<String>,
    /// Raw CSV bytes received from the upload.
    pub bytes: Vec<u8>,
}

impl UploadMetadataForm {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }

    /// Parse the uploaded CSV into full taxonomy rows.
    pub fn into_new_entries(self) -> UploadFormResult<Vec<NewMetadataEntry>> {
        let rows = read_required_columns(self.bytes, &METADATA_COLUMNS)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut values = row.values.into_iter();
                let mut next = || values.next().unwrap_or_default();
                NewMetadataEntry::from(TaxonomyPath::new(next(), next(), next(), next()))
            })
            .collect())
    }
}
