use serde::{Deserialize, Serialize};

/// Full four-level taxonomy path used to tag and look up SKUs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyPath {
    pub location: String,
    pub department: String,
    pub category: String,
    pub subcategory: String,
}

impl TaxonomyPath {
    /// Build a path from its four levels, outermost first.
    pub fn new(
        location: impl Into<String>,
        department: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            department: department.into(),
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }
}
