use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::pagination::PageWindow;
use crate::domain::repositories::{BoxError, FeedbackRepository};
use crate::domain::value_objects::{FeedbackFilter, FeedbackId};
use aws_sdk_dynamodb::types::{AttributeValue, Select};
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_item, from_items, to_item};
use std::collections::HashMap;
use typed_builder::TypedBuilder;

#[derive(Clone, TypedBuilder)]
pub struct FeedbackRepositoryImpl {
    client: Client,
    table_name: String,
}

/// Filter expression with its attribute name and value placeholders.
#[derive(Debug, Default, PartialEq)]
struct ScanFilter {
    expression: Option<String>,
    names: Option<HashMap<String, String>>,
    values: Option<HashMap<String, AttributeValue>>,
}

impl From<&FeedbackFilter> for ScanFilter {
    fn from(filter: &FeedbackFilter) -> Self {
        let mut conditions = vec![];
        let mut names = HashMap::new();
        let mut values = HashMap::new();

        let mut push = |attribute: &str, value: AttributeValue| {
            conditions.push(format!("#{attribute} = :{attribute}"));
            names.insert(format!("#{attribute}"), attribute.to_string());
            values.insert(format!(":{attribute}"), value);
        };

        if let Some(customer) = filter.customer() {
            push("customer", AttributeValue::S(customer.to_string()));
        }
        if let Some(rating) = filter.rating() {
            push("rating", AttributeValue::N(rating.to_string()));
        }
        if let Some(product) = filter.product() {
            push("product", AttributeValue::S(product.to_string()));
        }

        if conditions.is_empty() {
            return Self::default();
        }

        Self {
            expression: Some(conditions.join(" AND ")),
            names: Some(names),
            values: Some(values),
        }
    }
}

fn id_key(id: &FeedbackId) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

/// Sorts scanned documents by id descending, then applies the window.
fn newest_first(mut results: Vec<Feedback>, window: PageWindow) -> Vec<Feedback> {
    results.sort_unstable_by(|a, b| b.id().cmp(a.id()));

    let skip = usize::try_from(window.skip()).unwrap_or(usize::MAX);
    let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);
    results.into_iter().skip(skip).take(limit).collect()
}

impl FeedbackRepositoryImpl {
    async fn scan_matching(&self, filter: &FeedbackFilter) -> Result<Vec<Feedback>, BoxError> {
        let scan_filter = ScanFilter::from(filter);
        let mut results: Vec<Feedback> = vec![];
        let mut exclusive_start_key = None;

        loop {
            let resp = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_filter_expression(scan_filter.expression.clone())
                .set_expression_attribute_names(scan_filter.names.clone())
                .set_expression_attribute_values(scan_filter.values.clone())
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            if let Some(items) = resp.items {
                let feedback: Vec<Feedback> = from_items(items)?;
                results.extend(feedback);
            }

            match resp.last_evaluated_key {
                Some(last_evaluated_key) => {
                    exclusive_start_key = Some(last_evaluated_key);
                }
                None => {
                    break;
                }
            }
        }

        Ok(results)
    }
}

impl FeedbackRepository for FeedbackRepositoryImpl {
    async fn count(&self, filter: &FeedbackFilter) -> Result<u64, BoxError> {
        let scan_filter = ScanFilter::from(filter);
        let mut total = 0u64;
        let mut exclusive_start_key = None;

        loop {
            let resp = self
                .client
                .scan()
                .table_name(&self.table_name)
                .select(Select::Count)
                .set_filter_expression(scan_filter.expression.clone())
                .set_expression_attribute_names(scan_filter.names.clone())
                .set_expression_attribute_values(scan_filter.values.clone())
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            total += u64::try_from(resp.count).unwrap_or_default();

            match resp.last_evaluated_key {
                Some(last_evaluated_key) => {
                    exclusive_start_key = Some(last_evaluated_key);
                }
                None => {
                    break;
                }
            }
        }

        Ok(total)
    }

    async fn find(
        &self,
        filter: &FeedbackFilter,
        window: PageWindow,
    ) -> Result<Vec<Feedback>, BoxError> {
        let results = self.scan_matching(filter).await?;
        Ok(newest_first(results, window))
    }

    /// One scan serves both the total and the page.
    async fn find_counted<F>(
        &self,
        filter: &FeedbackFilter,
        window_for: F,
    ) -> Result<(u64, Vec<Feedback>), BoxError>
    where
        F: FnOnce(u64) -> PageWindow + Send,
    {
        let results = self.scan_matching(filter).await?;
        let total = results.len() as u64;
        Ok((total, newest_first(results, window_for(total))))
    }

    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>, BoxError> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", id_key(id))
            .send()
            .await?;

        match resp.item {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, feedback: NewFeedback) -> Result<Feedback, BoxError> {
        let feedback = feedback.into_feedback(FeedbackId::generate());
        let item = to_item(&feedback)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", "id")
            .send()
            .await?;

        Ok(feedback)
    }

    async fn replace(&self, id: &FeedbackId, feedback: NewFeedback) -> Result<(), BoxError> {
        let item = to_item(feedback.into_feedback(id.clone()))?;

        let result = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", "id")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e)
                if e
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                tracing::debug!("Feedback {} not found, nothing replaced", id);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: &FeedbackId) -> Result<(), BoxError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", id_key(id))
            .send()
            .await?;

        Ok(())
    }
}
