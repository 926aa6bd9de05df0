use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::price::{Price, PriceQuery};

pub mod price;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over price records.
pub trait PriceReader {
    /// Returns every record of the queried product and brand whose window
    /// contains the application date, in no particular order.
    fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<Price>>;
}
