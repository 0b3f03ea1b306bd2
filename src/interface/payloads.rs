use crate::domain::entities::NewFeedback;
use crate::domain::pagination::{PageQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::util::deserialize_blank_as_none;
use serde::Deserialize;
use std::ops::RangeInclusive;

pub(crate) const RATING_RANGE: RangeInclusive<i32> = 0..=5;
pub(crate) const RATING_RANGE_MESSAGE: &str = "Rating must be within the correct range from 0 to 5";

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_per_page() -> i64 {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListParams {
    #[serde(default = "default_page")]
    page: i64,
    #[serde(default = "default_per_page")]
    per_page: i64,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    rating: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    product: Option<String>,
    #[serde(default, deserialize_with = "deserialize_blank_as_none")]
    produkt: Option<String>,
}

impl From<ListParams> for PageQuery {
    fn from(value: ListParams) -> Self {
        PageQuery::builder()
            .page(value.page)
            .page_size(value.per_page)
            .customer(value.name)
            .rating(value.rating)
            .product(value.product.or(value.produkt))
            .build()
    }
}

/// Request body for creating or replacing a record. A client supplied `id` is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackPayload {
    rating: i32,
    #[serde(default)]
    feedback: Option<String>,
    #[serde(default)]
    customer: Option<String>,
    product: String,
    vendor: String,
}

impl TryFrom<FeedbackPayload> for NewFeedback {
    type Error = &'static str;

    fn try_from(value: FeedbackPayload) -> Result<Self, Self::Error> {
        if !RATING_RANGE.contains(&value.rating) {
            return Err(RATING_RANGE_MESSAGE);
        }

        Ok(NewFeedback::builder()
            .rating(value.rating)
            .feedback(value.feedback)
            .customer(value.customer)
            .product(value.product)
            .vendor(value.vendor)
            .build())
    }
}
