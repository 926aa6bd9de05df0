//! Helpers for integration tests.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use prices_service::models::price::NewPrice;
use prices_service::schema::prices;
use pushkind_common::db::{DbPool, establish_connection_pool};

const YEAR_END: &str = "2020-12-31T23:59:59";

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }
    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Inserts `rows` and returns the database result untouched.
    pub fn insert_prices(&self, rows: &[NewPrice]) -> QueryResult<usize> {
        let mut conn = self
            .pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        diesel::insert_into(prices::table)
            .values(rows)
            .execute(&mut conn)
    }

    /// Loads the reference tariffs for product 35455 under brands 1, 2 and 3.
    ///
    /// Every brand shares the same windows; amounts differ by one unit per brand.
    pub fn seed_reference_prices(&self) {
        let mut rows = Vec::new();
        for (brand_id, offset) in [(1, 0), (2, 100), (3, 200)] {
            rows.extend([
                price(brand_id, 1, 0, "2020-06-14T00:00:00", YEAR_END, 3550 + offset),
                price(brand_id, 2, 1, "2020-06-14T15:00:00", "2020-06-14T18:30:00", 2545 + offset),
                price(brand_id, 3, 1, "2020-06-15T00:00:00", "2020-06-15T11:00:00", 3050 + offset),
                price(brand_id, 4, 1, "2020-06-15T16:00:00", YEAR_END, 3895 + offset),
            ]);
        }
        self.insert_prices(&rows).expect("Failed to seed prices");
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Parses a UTC timestamp written as `YYYY-MM-DDTHH:MM:SS`.
pub fn utc(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").expect("valid timestamp")
}

/// Builds a price row for product 35455.
pub fn price(
    brand_id: i32,
    price_list: i32,
    priority: i32,
    start_date: &str,
    end_date: &str,
    price_cents: i64,
) -> NewPrice<'static> {
    NewPrice {
        product_id: 35455,
        brand_id,
        price_list,
        start_date: utc(start_date),
        end_date: utc(end_date),
        priority,
        price_cents,
        currency: "EUR",
    }
}
