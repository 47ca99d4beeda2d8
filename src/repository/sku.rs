use diesel::prelude::*;

use crate::domain::sku::{NewSku as DomainNewSku, Sku as DomainSku};
use crate::domain::taxonomy::TaxonomyPath;
use crate::models::sku::{NewSku as DbNewSku, Sku as DbSku};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SkuReader, SkuWriter};

impl SkuReader for DieselRepository {
    fn list_skus_by_path(&self, path: &TaxonomyPath) -> RepositoryResult<Vec<DomainSku>> {
        use crate::schema::sku_data;

        let mut conn = self.conn()?;

        let items = sku_data::table
            .filter(sku_data::location.eq(path.location.as_str()))
            .filter(sku_data::department.eq(path.department.as_str()))
            .filter(sku_data::category.eq(path.category.as_str()))
            .filter(sku_data::subcategory.eq(path.subcategory.as_str()))
            .order(sku_data::id.asc())
            .load::<DbSku>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl SkuWriter for DieselRepository {
    fn replace_skus(&self, items: &[DomainNewSku]) -> RepositoryResult<usize> {
        use crate::schema::sku_data;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<usize, RepositoryError, _>(|conn| {
            let removed = diesel::delete(sku_data::table).execute(conn)?;
            log::debug!("Cleared {removed} SKU rows");

            let mut count_inserted: usize = 0;

            for item in items {
                let db_new = DbNewSku::from(item);

                diesel::insert_into(sku_data::table)
                    .values(&db_new)
                    .execute(conn)?;
                count_inserted += 1;
            }

            Ok(count_inserted)
        })
    }
}
