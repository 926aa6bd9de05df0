use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use pushkind_common::routes::empty_string_as_none;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::price::PriceQuery;

/// Longest raw parameter accepted before parsing.
const PARAM_MAX_LEN: u64 = 64;

/// Layouts accepted for `application_date` when it carries a UTC offset.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Layouts accepted for `application_date` without an offset. Read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Result type returned by the price query form helpers.
pub type PriceQueryFormResult<T> = Result<T, PriceQueryFormError>;

/// Errors raised while turning request parameters into a [`PriceQuery`].
#[derive(Debug, Error)]
pub enum PriceQueryFormError {
    /// At least one of the required parameters is absent or empty.
    #[error("Missing parameters")]
    MissingParameters,
    /// An identifier is not a positive integer.
    #[error("Invalid parameter `{name}`")]
    InvalidParameter { name: &'static str },
    /// `application_date` is not an ISO-8601 date-time.
    #[error("Invalid date format")]
    InvalidDate,
}

/// Raw query parameters of the price lookup endpoint.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PriceQueryForm {
    /// Product identifier.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = PARAM_MAX_LEN))]
    pub product_id: Option<String>,
    /// Brand identifier.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = PARAM_MAX_LEN))]
    pub brand_id: Option<String>,
    /// ISO-8601 date-time, offset optional.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(length(max = PARAM_MAX_LEN))]
    pub application_date: Option<String>,
}

impl PriceQueryForm {
    /// Validates the parameters and converts them into a domain [`PriceQuery`].
    ///
    /// Presence of all three parameters is checked before any of them is parsed.
    pub fn into_price_query(self) -> PriceQueryFormResult<PriceQuery> {
        let (Some(product_id), Some(brand_id), Some(application_date)) = (
            self.product_id.as_deref(),
            self.brand_id.as_deref(),
            self.application_date.as_deref(),
        ) else {
            return Err(PriceQueryFormError::MissingParameters);
        };
        if [product_id, brand_id, application_date]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err(PriceQueryFormError::MissingParameters);
        }

        self.validate().map_err(invalid_field)?;

        let product_id = parse_identifier("product_id", product_id)?;
        let brand_id = parse_identifier("brand_id", brand_id)?;
        let application_date =
            parse_application_date(application_date).ok_or(PriceQueryFormError::InvalidDate)?;

        Ok(PriceQuery::new(product_id, brand_id, application_date))
    }
}

/// Reports the first field rejected by the `validator` rules.
fn invalid_field(errors: ValidationErrors) -> PriceQueryFormError {
    let fields = errors.field_errors();
    ["product_id", "brand_id"]
        .into_iter()
        .find(|name| fields.contains_key(*name))
        .map(|name| PriceQueryFormError::InvalidParameter { name })
        .unwrap_or(PriceQueryFormError::InvalidDate)
}

fn parse_identifier(name: &'static str, raw: &str) -> PriceQueryFormResult<i32> {
    match raw.trim().parse::<i32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(PriceQueryFormError::InvalidParameter { name }),
    }
}

/// Parses an ISO-8601 date-time into a UTC instant.
///
/// Accepts a `T` or space separator, optional seconds and fraction, and an
/// optional `Z`, `±HH:MM`, `±HHMM` or `±HH` offset. Values without an offset
/// are taken as UTC. Date-only values and leap seconds are rejected.
pub fn parse_application_date(raw: &str) -> Option<DateTime<Utc>> {
    parse_any_layout(raw.trim()).filter(|parsed| parsed.nanosecond() < 1_000_000_000)
}

fn parse_any_layout(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let normalized = match raw.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => raw.to_string(),
    };

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&normalized, format).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(&normalized, format).ok())
                .map(|naive| naive.and_utc())
        })
}
