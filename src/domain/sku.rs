use serde::{Deserialize, Serialize};

use crate::domain::taxonomy::TaxonomyPath;

/// Catalog item tagged with a full taxonomy path.
///
/// The path is not checked against the metadata table; the tag is advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    pub id: i32,
    /// Stock-keeping-unit code.
    pub sku: i64,
    pub name: String,
    pub location: String,
    pub department: String,
    pub category: String,
    pub subcategory: String,
}

/// Payload required to insert a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSku {
    pub sku: i64,
    pub name: String,
    pub path: TaxonomyPath,
}

impl NewSku {
    pub fn new(sku: i64, name: impl Into<String>, path: TaxonomyPath) -> Self {
        Self {
            sku,
            name: name.into(),
            path,
        }
    }
}
