use serde::{Deserialize, Serialize};

use crate::domain::taxonomy::TaxonomyPath;

/// Domain representation of a taxonomy row.
///
/// Rows may be partial: a row created through the location endpoint only
/// carries a location, a department row carries location and department, and
/// so on down the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// Surrogate key.
    pub id: i32,
    pub location: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

/// Payload required to append a taxonomy row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMetadataEntry {
    pub location: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl NewMetadataEntry {
    /// Start a row that only names a location.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }

    /// Attach a department to the row.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Attach a category to the row.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Attach a subcategory to the row.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }
}

impl From<TaxonomyPath> for NewMetadataEntry {
    fn from(path: TaxonomyPath) -> Self {
        NewMetadataEntry::new(path.location)
            .with_department(path.department)
            .with_category(path.category)
            .with_subcategory(path.subcategory)
    }
}

/// Identifies the department rows addressed by update and delete requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentKey {
    pub location: String,
    pub department: String,
}

impl DepartmentKey {
    pub fn new(location: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            department: department.into(),
        }
    }
}

/// Patch applied to a department row.
///
/// The outer `None` leaves the column untouched, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDepartment {
    pub category: Option<Option<String>>,
    pub subcategory: Option<Option<String>>,
}

impl UpdateDepartment {
    pub fn new(category: Option<Option<String>>, subcategory: Option<Option<String>>) -> Self {
        Self {
            category,
            subcategory,
        }
    }

    /// Set the category on the patch.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(Some(category.into()));
        self
    }

    /// Set the subcategory on the patch.
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(Some(subcategory.into()));
        self
    }

    /// Clear the stored category.
    pub fn clear_category(mut self) -> Self {
        self.category = Some(None);
        self
    }

    /// Whether the patch would leave the row unchanged.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.subcategory.is_none()
    }
}
