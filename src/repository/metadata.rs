use diesel::prelude::*;

use crate::domain::metadata::{
    DepartmentKey, MetadataEntry as DomainMetadataEntry,
    NewMetadataEntry as DomainNewMetadataEntry, UpdateDepartment as DomainUpdateDepartment,
};
use crate::models::metadata::{
    MetadataEntry as DbMetadataEntry, NewMetadataEntry as DbNewMetadataEntry,
    UpdateDepartment as DbUpdateDepartment,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, MetadataReader, MetadataWriter};

impl MetadataReader for DieselRepository {
    fn list_locations(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        let values = metadata::table
            .select(metadata::location)
            .filter(metadata::location.is_not_null())
            .distinct()
            .order(metadata::location.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(values.into_iter().flatten().collect())
    }

    fn list_departments(&self, location: &str) -> RepositoryResult<Vec<String>> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        let values = metadata::table
            .select(metadata::department)
            .filter(metadata::location.eq(location))
            .filter(metadata::department.is_not_null())
            .distinct()
            .order(metadata::department.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(values.into_iter().flatten().collect())
    }

    fn list_categories(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        let values = metadata::table
            .select(metadata::category)
            .filter(metadata::category.is_not_null())
            .distinct()
            .order(metadata::category.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(values.into_iter().flatten().collect())
    }

    fn list_subcategories(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        let values = metadata::table
            .select(metadata::subcategory)
            .filter(metadata::subcategory.is_not_null())
            .distinct()
            .order(metadata::subcategory.asc())
            .load::<Option<String>>(&mut conn)?;

        Ok(values.into_iter().flatten().collect())
    }
}

impl MetadataWriter for DieselRepository {
    fn replace_metadata(&self, entries: &[DomainNewMetadataEntry]) -> RepositoryResult<usize> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<usize, RepositoryError, _>(|conn| {
            let removed = diesel::delete(metadata::table).execute(conn)?;
            log::debug!("Cleared {removed} metadata rows");

            let mut count_inserted: usize = 0;

            for entry in entries {
                let db_new = DbNewMetadataEntry::from(entry);

                diesel::insert_into(metadata::table)
                    .values(&db_new)
                    .execute(conn)?;
                count_inserted += 1;
            }

            Ok(count_inserted)
        })
    }

    fn create_metadata_entry(
        &self,
        entry: &DomainNewMetadataEntry,
    ) -> RepositoryResult<DomainMetadataEntry> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        let insertable = DbNewMetadataEntry::from(entry);

        let created = diesel::insert_into(metadata::table)
            .values(&insertable)
            .get_result::<DbMetadataEntry>(&mut conn)?;

        Ok(created.into())
    }

    fn update_department(
        &self,
        key: &DepartmentKey,
        updates: &DomainUpdateDepartment,
    ) -> RepositoryResult<DomainMetadataEntry> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainMetadataEntry, RepositoryError, _>(|conn| {
            let existing = first_department_row(conn, key)?.ok_or(RepositoryError::NotFound)?;

            // diesel rejects an empty changeset
            if updates.is_empty() {
                return Ok(existing.into());
            }

            let db_updates = DbUpdateDepartment::from(updates);

            let updated = diesel::update(metadata::table.find(existing.id))
                .set(&db_updates)
                .get_result::<DbMetadataEntry>(conn)?;

            Ok(updated.into())
        })
    }

    fn delete_department(&self, key: &DepartmentKey) -> RepositoryResult<()> {
        use crate::schema::metadata;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let existing = first_department_row(conn, key)?.ok_or(RepositoryError::NotFound)?;

            let deleted = diesel::delete(metadata::table.find(existing.id)).execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}

/// Lowest-id row whose location and department both match `key`.
fn first_department_row(
    conn: &mut SqliteConnection,
    key: &DepartmentKey,
) -> RepositoryResult<Option<DbMetadataEntry>> {
    use crate::schema::metadata;

    let entry = metadata::table
        .filter(metadata::location.eq(key.location.as_str()))
        .filter(metadata::department.eq(key.department.as_str()))
        .order(metadata::id.asc())
        .first::<DbMetadataEntry>(conn)
        .optional()?;

    Ok(entry)
}
