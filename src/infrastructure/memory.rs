use crate::domain::entities::{Feedback, NewFeedback};
use crate::domain::pagination::PageWindow;
use crate::domain::repositories::{BoxError, FeedbackRepository};
use crate::domain::value_objects::{FeedbackFilter, FeedbackId};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Feedback collection held in process memory, for tests and runs without AWS.
#[derive(Clone, Default)]
pub struct InMemoryFeedbackRepository {
    items: Arc<RwLock<BTreeMap<FeedbackId, Feedback>>>,
}

impl FeedbackRepository for InMemoryFeedbackRepository {
    async fn count(&self, filter: &FeedbackFilter) -> Result<u64, BoxError> {
        let items = self.items.read().await;
        Ok(items.values().filter(|f| filter.matches(f)).count() as u64)
    }

    async fn find(
        &self,
        filter: &FeedbackFilter,
        window: PageWindow,
    ) -> Result<Vec<Feedback>, BoxError> {
        let skip = usize::try_from(window.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);

        let items = self.items.read().await;
        Ok(items
            .values()
            .rev()
            .filter(|f| filter.matches(f))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &FeedbackId) -> Result<Option<Feedback>, BoxError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn insert(&self, feedback: NewFeedback) -> Result<Feedback, BoxError> {
        let feedback = feedback.into_feedback(FeedbackId::generate());
        self.items
            .write()
            .await
            .insert(feedback.id().clone(), feedback.clone());
        Ok(feedback)
    }

    async fn replace(&self, id: &FeedbackId, feedback: NewFeedback) -> Result<(), BoxError> {
        if let Some(stored) = self.items.write().await.get_mut(id) {
            *stored = feedback.into_feedback(id.clone());
        }
        Ok(())
    }

    async fn delete(&self, id: &FeedbackId) -> Result<(), BoxError> {
        self.items.write().await.remove(id);
        Ok(())
    }
}
