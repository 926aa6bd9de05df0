use std::cmp::Ordering;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Domain representation of a price offered for a product and brand under a
/// price list during a fixed time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    /// Unique identifier of the price record.
    pub id: i32,
    /// Identifier of the priced product.
    pub product_id: i32,
    /// Identifier of the brand selling the product.
    pub brand_id: i32,
    /// Identifier of the tariff this record belongs to.
    pub price_list: i32,
    /// First instant at which the price applies.
    pub start_date: DateTime<Utc>,
    /// Last instant at which the price applies.
    pub end_date: DateTime<Utc>,
    /// Weight used to pick a record when windows overlap. Higher wins.
    pub priority: i32,
    /// Price represented in the smallest currency unit (for example cents).
    pub price_cents: i64,
    /// ISO 4217 currency code associated with the price.
    pub currency: String,
}

impl Price {
    /// Whether this record covers the product, brand and instant of `query`.
    ///
    /// Both ends of the window are inclusive.
    pub fn applies_to(&self, query: &PriceQuery) -> bool {
        self.product_id == query.product_id
            && self.brand_id == query.brand_id
            && self.start_date <= query.application_date
            && query.application_date <= self.end_date
    }

    /// Orders two records by precedence: priority, then the later start date,
    /// then the lower price list.
    fn precedence(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.start_date.cmp(&other.start_date))
            .then_with(|| other.price_list.cmp(&self.price_list))
    }
}

/// Lookup of the price that applies to a product and brand at an instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    /// Identifier of the priced product.
    pub product_id: i32,
    /// Identifier of the brand selling the product.
    pub brand_id: i32,
    /// Instant for which the price is requested.
    pub application_date: DateTime<Utc>,
}

impl PriceQuery {
    /// Construct a query for `product_id` sold by `brand_id` at `application_date`.
    pub fn new(product_id: i32, brand_id: i32, application_date: DateTime<Utc>) -> Self {
        Self {
            product_id,
            brand_id,
            application_date,
        }
    }
}

/// Picks the record that applies to `query` out of `records`.
///
/// Records that do not cover the query are ignored, so callers may pass a
/// broader snapshot than the one the storage filter returns. Among the
/// candidates the highest priority wins; ties go to the latest start date and
/// then to the lowest price list, which is unique per product and brand.
/// Returns `None` when nothing covers the query.
pub fn resolve_price<'a>(records: &'a [Price], query: &PriceQuery) -> Option<&'a Price> {
    records
        .iter()
        .filter(|record| record.applies_to(query))
        .max_by(|a, b| a.precedence(b))
}

/// The resolved price as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedPrice {
    pub product_id: i32,
    pub brand_id: i32,
    pub price_list: i32,
    #[serde(serialize_with = "serialize_instant")]
    pub start_date: DateTime<Utc>,
    #[serde(serialize_with = "serialize_instant")]
    pub end_date: DateTime<Utc>,
    /// Rendered as a fixed-point string with two decimals.
    #[serde(rename = "price", serialize_with = "serialize_cents")]
    pub price_cents: i64,
}

impl From<&Price> for AppliedPrice {
    fn from(value: &Price) -> Self {
        Self {
            product_id: value.product_id,
            brand_id: value.brand_id,
            price_list: value.price_list,
            start_date: value.start_date,
            end_date: value.end_date,
            price_cents: value.price_cents,
        }
    }
}

/// Formats an amount in minor units as a decimal string with two fractional digits.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// RFC 3339 with an explicit `+00:00` offset rather than `Z`.
fn serialize_instant<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
}

fn serialize_cents<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_cents(*value))
}
