use diesel::prelude::*;

use crate::domain::metadata::{
    MetadataEntry as DomainMetadataEntry, NewMetadataEntry as DomainNewMetadataEntry,
    UpdateDepartment as DomainUpdateDepartment,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::metadata)]
pub struct MetadataEntry {
    pub id: i32,
    pub location: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::metadata)]
pub struct NewMetadataEntry<'a> {
    pub location: Option<&'a str>,
    pub department: Option<&'a str>,
    pub category: Option<&'a str>,
    pub subcategory: Option<&'a str>,
}

/// Outer `None` is skipped by diesel; `Some(None)` writes NULL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::metadata)]
pub struct UpdateDepartment<'a> {
    pub category: Option<Option<&'a str>>,
    pub subcategory: Option<Option<&'a str>>,
}

impl From<MetadataEntry> for DomainMetadataEntry {
    fn from(value: MetadataEntry) -> Self {
        Self {
            id: value.id,
            location: value.location,
            department: value.department,
            category: value.category,
            subcategory: value.subcategory,
        }
    }
}

impl<'a> From<&'a DomainNewMetadataEntry> for NewMetadataEntry<'a> {
    fn from(value: &'a DomainNewMetadataEntry) -> Self {
        Self {
            location: value.location.as_deref(),
            department: value.department.as_deref(),
            category: value.category.as_deref(),
            subcategory: value.subcategory.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDepartment> for UpdateDepartment<'a> {
    fn from(value: &'a DomainUpdateDepartment) -> Self {
        Self {
            category: value.category.as_ref().map(Option::as_deref),
            subcategory: value.subcategory.as_ref().map(Option::as_deref),
        }
    }
}
