use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::price::Price as DomainPrice;

/// Row of the `prices` table. Timestamps are stored as UTC.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::prices)]
pub struct Price {
    pub id: i32,
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: String,
}

/// Insertable row used to load price fixtures.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::prices)]
pub struct NewPrice<'a> {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub priority: i32,
    pub price_cents: i64,
    pub currency: &'a str,
}

impl From<Price> for DomainPrice {
    fn from(value: Price) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            start_date: value.start_date.and_utc(),
            end_date: value.end_date.and_utc(),
            priority: value.priority,
            price_cents: value.price_cents,
            currency: value.currency,
        }
    }
}
