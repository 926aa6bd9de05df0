use mockall::mock;

use super::PriceReader;
use crate::domain::price::{Price, PriceQuery};
use pushkind_common::repository::errors::RepositoryResult;

mock! {
    pub PriceReader {}

    impl PriceReader for PriceReader {
        fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<Price>>;
    }
}
