use diesel::prelude::*;
use pushkind_common::repository::errors::RepositoryResult;

use crate::{
    domain::price::{Price as DomainPrice, PriceQuery},
    models::price::Price as DbPrice,
    repository::{DieselRepository, PriceReader},
};

impl PriceReader for DieselRepository {
    fn list_applicable_prices(&self, query: &PriceQuery) -> RepositoryResult<Vec<DomainPrice>> {
        use crate::schema::prices;

        let mut conn = self.conn()?;
        let at = query.application_date.naive_utc();

        let rows = prices::table
            .filter(prices::product_id.eq(query.product_id))
            .filter(prices::brand_id.eq(query.brand_id))
            .filter(prices::start_date.le(at))
            .filter(prices::end_date.ge(at))
            .select(DbPrice::as_select())
            .load::<DbPrice>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
