use diesel::prelude::*;
use diesel::sql_types::Text;

mod common;

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

#[test]
fn test_migrations_create_prices_table_and_cleanup() {
    let base = "test_migrations_create_prices_table.db";

    {
        let test_db = common::TestDb::new(base);
        let mut conn = test_db.pool().get().expect("connection");
        let tables = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'prices'",
        )
        .load::<TableName>(&mut conn)
        .expect("query sqlite_master");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].name, "prices");
    }

    let db_path = std::path::Path::new(base);
    assert!(!db_path.exists());
    assert!(!std::path::Path::new(&format!("{base}-shm")).exists());
    assert!(!std::path::Path::new(&format!("{base}-wal")).exists());
}
