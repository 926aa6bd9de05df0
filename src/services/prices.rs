use crate::domain::price::{AppliedPrice, resolve_price};
use crate::forms::prices::PriceQueryForm;
use crate::repository::PriceReader;
use crate::services::{ServiceError, ServiceResult};

/// Finds the price that applies to the product, brand and date in `form`.
///
/// Invalid or missing parameters yield [`ServiceError::Form`] and an empty
/// match yields [`ServiceError::NotFound`]. Storage failures are propagated.
pub fn find_applicable_price<R>(repo: &R, form: PriceQueryForm) -> ServiceResult<AppliedPrice>
where
    R: PriceReader + ?Sized,
{
    let query = form
        .into_price_query()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let candidates = repo
        .list_applicable_prices(&query)
        .map_err(ServiceError::from)?;

    match resolve_price(&candidates, &query) {
        Some(price) => Ok(AppliedPrice::from(price)),
        None => {
            log::debug!(
                "No price for product {} brand {} at {}",
                query.product_id,
                query.brand_id,
                query.application_date
            );
            Err(ServiceError::NotFound)
        }
    }
}
