use diesel::prelude::*;

use crate::domain::sku::{NewSku as DomainNewSku, Sku as DomainSku};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sku_data)]
pub struct Sku {
    pub id: i32,
    pub sku: i64,
    pub name: String,
    pub location: String,
    pub department: String,
    pub category: String,
    pub subcategory: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sku_data)]
pub struct NewSku<'a> {
    pub sku: i64,
    pub name: &'a str,
    pub location: &'a str,
    pub department: &'a str,
    pub category: &'a str,
    pub subcategory: &'a str,
}

impl From<Sku> for DomainSku {
    fn from(value: Sku) -> Self {
        Self {
            id: value.id,
            sku: value.sku,
            name: value.name,
            location: value.location,
            department: value.department,
            category: value.category,
            subcategory: value.subcategory,
        }
    }
}

impl<'a> From<&'a DomainNewSku> for NewSku<'a> {
    fn from(value: &'a DomainNewSku) -> Self {
        Self {
            sku: value.sku,
            name: value.name.as_str(),
            location: value.path.location.as_str(),
            department: value.path.department.as_str(),
            category: value.path.category.as_str(),
            subcategory: value.path.subcategory.as_str(),
        }
    }
}
