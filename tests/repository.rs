use diesel::connection::SimpleConnection;
use sku_taxonomy::domain::metadata::{DepartmentKey, NewMetadataEntry, UpdateDepartment};
use sku_taxonomy::domain::sku::NewSku;
use sku_taxonomy::domain::taxonomy::TaxonomyPath;
use sku_taxonomy::repository::errors::RepositoryError;
use sku_taxonomy::repository::{
    DieselRepository, MetadataReader, MetadataWriter, SkuReader, SkuWriter,
};

mod common;

fn full_row(location: &str, department: &str, category: &str, subcategory: &str) -> NewMetadataEntry {
    NewMetadataEntry::from(TaxonomyPath::new(location, department, category, subcategory))
}

#[test]
fn test_metadata_replace_and_distinct_listings() {
    let test_db = common::TestDb::new("test_metadata_replace_and_distinct_listings.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_metadata_entry(&NewMetadataEntry::new("Old"))
        .unwrap();

    let inserted = repo
        .replace_metadata(&[
            full_row("B", "Fresh", "Dairy", "Milk"),
            full_row("A", "Fresh", "Dairy", "Cheese"),
            full_row("A", "Frozen", "Dairy", "Milk"),
        ])
        .unwrap();
    assert_eq!(inserted, 3);

    assert_eq!(repo.list_locations().unwrap(), vec!["A", "B"]);
    assert_eq!(repo.list_departments("A").unwrap(), vec!["Fresh", "Frozen"]);
    assert_eq!(repo.list_departments("B").unwrap(), vec!["Fresh"]);
    assert!(repo.list_departments("Old").unwrap().is_empty());
    assert_eq!(repo.list_categories().unwrap(), vec!["Dairy"]);
    assert_eq!(repo.list_subcategories().unwrap(), vec!["Cheese", "Milk"]);
}

#[test]
fn test_partial_rows_do_not_leak_nulls_into_listings() {
    let test_db = common::TestDb::new("test_partial_rows_do_not_leak_nulls.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_metadata_entry(&NewMetadataEntry::new("A"))
        .unwrap();
    repo.create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();

    assert_eq!(repo.list_locations().unwrap(), vec!["A"]);
    assert_eq!(repo.list_departments("A").unwrap(), vec!["D"]);
    assert!(repo.list_categories().unwrap().is_empty());
    assert!(repo.list_subcategories().unwrap().is_empty());
}

#[test]
fn test_replace_with_empty_list_clears_metadata() {
    let test_db = common::TestDb::new("test_replace_with_empty_list_clears_metadata.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.replace_metadata(&[full_row("A", "D", "C", "S")])
        .unwrap();
    assert_eq!(repo.replace_metadata(&[]).unwrap(), 0);

    assert!(repo.list_locations().unwrap().is_empty());
}

#[test]
fn test_department_update_touches_first_match_only() {
    let test_db = common::TestDb::new("test_department_update_touches_first_match_only.db");
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    let second = repo
        .create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    let key = DepartmentKey::new("A", "D");

    let updated = repo
        .update_department(&key, &UpdateDepartment::default().with_category("Dairy"))
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.category.as_deref(), Some("Dairy"));
    assert!(updated.subcategory.is_none());

    let updated = repo
        .update_department(&key, &UpdateDepartment::default().with_subcategory("Milk"))
        .unwrap();
    assert_eq!(updated.category.as_deref(), Some("Dairy"));
    assert_eq!(updated.subcategory.as_deref(), Some("Milk"));

    let unchanged = repo
        .update_department(&key, &UpdateDepartment::default())
        .unwrap();
    assert_eq!(unchanged, updated);

    assert_eq!(repo.list_categories().unwrap(), vec!["Dairy"]);

    repo.delete_department(&key).unwrap();
    let remaining = repo
        .update_department(&key, &UpdateDepartment::default())
        .unwrap();
    assert_eq!(remaining.id, second.id);
    assert!(remaining.category.is_none());
}

#[test]
fn test_department_update_with_null_clears_column() {
    let test_db = common::TestDb::new("test_department_update_with_null_clears_column.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    let key = DepartmentKey::new("A", "D");

    repo.update_department(
        &key,
        &UpdateDepartment::default()
            .with_category("Dairy")
            .with_subcategory("Milk"),
    )
    .unwrap();

    let cleared = repo
        .update_department(&key, &UpdateDepartment::default().clear_category())
        .unwrap();
    assert!(cleared.category.is_none());
    assert_eq!(cleared.subcategory.as_deref(), Some("Milk"));
    assert!(repo.list_categories().unwrap().is_empty());
}

#[test]
fn test_department_update_and_delete_report_missing_rows() {
    let test_db = common::TestDb::new("test_department_missing_rows.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    let missing = DepartmentKey::new("A", "Nope");

    let err = repo
        .update_department(&missing, &UpdateDepartment::default().with_category("C"))
        .expect_err("expected update of missing department to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    let err = repo
        .delete_department(&missing)
        .expect_err("expected delete of missing department to fail");
    assert!(matches!(err, RepositoryError::NotFound));

    assert_eq!(repo.list_departments("A").unwrap(), vec!["D"]);
}

#[test]
fn test_department_delete_removes_one_row() {
    let test_db = common::TestDb::new("test_department_delete_removes_one_row.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    repo.create_metadata_entry(&NewMetadataEntry::new("A").with_department("D"))
        .unwrap();
    let key = DepartmentKey::new("A", "D");

    repo.delete_department(&key).unwrap();
    assert_eq!(repo.list_departments("A").unwrap(), vec!["D"]);

    repo.delete_department(&key).unwrap();
    assert!(repo.list_departments("A").unwrap().is_empty());
    assert!(matches!(
        repo.delete_department(&key),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_sku_replace_and_exact_lookup() {
    let test_db = common::TestDb::new("test_sku_replace_and_exact_lookup.db");
    let repo = DieselRepository::new(test_db.pool());
    let path = TaxonomyPath::new("A", "D", "C", "S");

    repo.replace_skus(&[NewSku::new(1, "stale", path.clone())])
        .unwrap();

    let inserted = repo
        .replace_skus(&[
            NewSku::new(101, "Milk 1L", path.clone()),
            NewSku::new(102, "Milk 2L", path.clone()),
            NewSku::new(201, "Bread", TaxonomyPath::new("A", "D", "C", "Other")),
        ])
        .unwrap();
    assert_eq!(inserted, 3);

    let items = repo.list_skus_by_path(&path).unwrap();
    let codes: Vec<i64> = items.iter().map(|item| item.sku).collect();
    assert_eq!(codes, vec![101, 102]);
    assert_eq!(items[0].name, "Milk 1L");
    assert_eq!(items[0].subcategory, "S");

    assert!(
        repo.list_skus_by_path(&TaxonomyPath::new("a", "D", "C", "S"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_sku_replace_with_empty_list_clears_catalog() {
    let test_db = common::TestDb::new("test_sku_replace_with_empty_list.db");
    let repo = DieselRepository::new(test_db.pool());
    let path = TaxonomyPath::new("A", "D", "C", "S");

    repo.replace_skus(&[NewSku::new(101, "Milk", path.clone())])
        .unwrap();
    repo.replace_skus(&[]).unwrap();

    assert!(repo.list_skus_by_path(&path).unwrap().is_empty());
}

#[test]
fn test_failed_metadata_insert_rolls_back_whole_replace() {
    let test_db = common::TestDb::new("test_failed_metadata_insert_rolls_back.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.replace_metadata(&[full_row("Kept", "D", "C", "S")])
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    conn.batch_execute(
        "CREATE TRIGGER reject_bad_location BEFORE INSERT ON metadata \
         WHEN NEW.location = 'BAD' BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();
    drop(conn);

    let result = repo.replace_metadata(&[
        full_row("A", "D", "C", "S"),
        full_row("BAD", "D", "C", "S"),
    ]);
    assert!(matches!(result, Err(RepositoryError::Database(_))));

    assert_eq!(repo.list_locations().unwrap(), vec!["Kept"]);
}

#[test]
fn test_failed_sku_insert_rolls_back_whole_replace() {
    let test_db = common::TestDb::new("test_failed_sku_insert_rolls_back.db");
    let repo = DieselRepository::new(test_db.pool());
    let path = TaxonomyPath::new("A", "D", "C", "S");

    repo.replace_skus(&[NewSku::new(7, "Kept", path.clone())])
        .unwrap();

    let mut conn = test_db.pool().get().unwrap();
    conn.batch_execute(
        "CREATE TRIGGER reject_negative_sku BEFORE INSERT ON sku_data \
         WHEN NEW.sku < 0 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .unwrap();
    drop(conn);

    let result = repo.replace_skus(&[
        NewSku::new(101, "Milk", path.clone()),
        NewSku::new(-1, "Broken", path.clone()),
    ]);
    assert!(matches!(result, Err(RepositoryError::Database(_))));

    let codes: Vec<i64> = repo
        .list_skus_by_path(&path)
        .unwrap()
        .iter()
        .map(|item| item.sku)
        .collect();
    assert_eq!(codes, vec![7]);
}
