use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::pagination::PageWindow;
use crate::domain::value_objects::{FeedbackFilter, FeedbackId};
use std::future::Future;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Collection of feedback documents.
pub trait FeedbackRepository: Send + Sync {
    fn count(&self, filter: &FeedbackFilter) -> impl Future<Output = Result<u64, BoxError>> + Send;

    /// Matching documents, newest id first, restricted to `window`.
    fn find(
        &self,
        filter: &FeedbackFilter,
        window: PageWindow,
    ) -> impl Future<Output = Result<Vec<Feedback>, BoxError>> + Send;

    /// Total of matching documents together with the page `window_for(total)` selects.
    fn find_counted<F>(
        &self,
        filter: &FeedbackFilter,
        window_for: F,
    ) -> impl Future<Output = Result<(u64, Vec<Feedback>), BoxError>> + Send
    where
        F: FnOnce(u64) -> PageWindow + Send,
    {
        async move {
            let total = self.count(filter).await?;
            let documents = self.find(filter, window_for(total)).await?;
            Ok((total, documents))
        }
    }

    fn find_by_id(
        &self,
        id: &FeedbackId,
    ) -> impl Future<Output = Result<Option<Feedback>, BoxError>> + Send;

    /// Stores `feedback` under a freshly generated id.
    fn insert(
        &self,
        feedback: NewFeedback,
    ) -> impl Future<Output = Result<Feedback, BoxError>> + Send;

    /// Does nothing when `id` is not stored.
    fn replace(
        &self,
        id: &FeedbackId,
        feedback: NewFeedback,
    ) -> impl Future<Output = Result<(), BoxError>> + Send;

    /// Does nothing when `id` is not stored.
    fn delete(&self, id: &FeedbackId) -> impl Future<Output = Result<(), BoxError>> + Send;
}
