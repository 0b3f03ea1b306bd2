use crate::domain::entities::{Feedback, NewFeedback, PageResult};
use crate::domain::pagination::{
    clamp_page_size, is_first_page, is_last_page, normalize_page, total_pages, PageQuery,
    PageWindow,
};
use crate::domain::repositories::{BoxError, FeedbackRepository};
use crate::domain::value_objects::{FeedbackFilter, FeedbackId};
use typed_builder::TypedBuilder;

/// Listing and CRUD over a feedback collection. Holds no state besides the
/// repository handle, so clones can be shared freely between requests.
#[derive(Clone, TypedBuilder)]
pub struct FeedbackService<R> {
    repo: R,
}

/// A customer name wins over a rating; the product criterion always applies.
fn resolve_filter(query: &PageQuery) -> FeedbackFilter {
    let (customer, rating) = match query.customer() {
        Some(customer) => (Some(customer.to_string()), None),
        None => (None, query.rating()),
    };

    FeedbackFilter::builder()
        .customer(customer)
        .rating(rating)
        .product(query.product().map(str::to_string))
        .build()
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub async fn count_matching(&self, filter: &FeedbackFilter) -> Result<u64, BoxError> {
        self.repo.count(filter).await
    }

    pub async fn list_page(&self, query: &PageQuery) -> Result<Vec<Feedback>, BoxError> {
        Ok(self.page(query).await?.into_documents())
    }

    pub async fn page(&self, query: &PageQuery) -> Result<PageResult, BoxError> {
        let filter = resolve_filter(query);
        let page_size = clamp_page_size(query.page_size());
        let (total_documents, documents) = self
            .repo
            .find_counted(&filter, |total| {
                let page = normalize_page(query.page(), total_pages(total, page_size));
                PageWindow::for_page(page, page_size)
            })
            .await?;
        let total_pages = total_pages(total_documents, page_size);
        let page = normalize_page(query.page(), total_pages);

        tracing::debug!(
            "Listed page {} of {} (size {}, {} documents)",
            page,
            total_pages,
            page_size,
            total_documents
        );

        Ok(PageResult::builder()
            .total_documents(total_documents)
            .is_first_page(is_first_page(page, total_pages))
            .is_last_page(is_last_page(page, total_pages))
            .documents(documents)
            .build())
    }

    /// Malformed ids are reported as absent.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Feedback>, BoxError> {
        let Ok(id) = id.parse::<FeedbackId>() else {
            tracing::debug!("Malformed feedback id: {:?}", id);
            return Ok(None);
        };
        self.repo.find_by_id(&id).await
    }

    pub async fn create(&self, feedback: NewFeedback) -> Result<Feedback, BoxError> {
        self.repo.insert(feedback).await
    }

    pub async fn replace(&self, id: &FeedbackId, feedback: NewFeedback) -> Result<(), BoxError> {
        self.repo.replace(id, feedback).await
    }

    pub async fn delete(&self, id: &FeedbackId) -> Result<(), BoxError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryFeedbackRepository;

    fn new_feedback(customer: Option<&str>, rating: i32) -> NewFeedback {
        NewFeedback::builder()
            .rating(rating)
            .customer(customer.map(str::to_string))
            .product("Kettle")
            .vendor("Acme")
            .build()
    }

    async fn service_with(
        records: impl IntoIterator<Item = NewFeedback>,
    ) -> (FeedbackService<InMemoryFeedbackRepository>, Vec<Feedback>) {
        let service = FeedbackService::builder()
            .repo(InMemoryFeedbackRepository::default())
            .build();
        let mut stored = vec![];
        for record in records {
            stored.push(service.create(record).await.unwrap());
        }
        (service, stored)
    }

    #[tokio::test]
    async fn test_overflowing_page_returns_last_page() {
        let (service, stored) =
            service_with((0..23).map(|i| new_feedback(Some("Ann"), i % 6))).await;
        let query = PageQuery::builder().page(5).page_size(10).build();

        let result = service.page(&query).await.unwrap();

        assert_eq!(result.total_documents(), 23);
        assert!(!result.is_first_page());
        assert!(result.is_last_page());
        let expected: Vec<Feedback> = stored[..3].iter().rev().cloned().collect();
        assert_eq!(result.documents(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_first_page_is_newest_first() {
        let (service, stored) = service_with((0..23).map(|_| new_feedback(None, 3))).await;
        let query = PageQuery::builder().build();

        let result = service.page(&query).await.unwrap();

        assert!(result.is_first_page());
        assert!(!result.is_last_page());
        let expected: Vec<Feedback> = stored[13..].iter().rev().cloned().collect();
        assert_eq!(result.documents(), expected.as_slice());
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let (service, _) = service_with([]).await;
        let query = PageQuery::builder().page(1).page_size(10).build();

        let result = service.page(&query).await.unwrap();

        assert_eq!(result.total_documents(), 0);
        assert!(result.is_first_page());
        assert!(result.is_last_page());
        assert!(result.documents().is_empty());
    }

    #[tokio::test]
    async fn test_page_size_is_clamped() {
        let (service, _) = service_with((0..30).map(|_| new_feedback(None, 3))).await;

        let small = PageQuery::builder().page_size(3).build();
        assert_eq!(service.list_page(&small).await.unwrap().len(), 5);

        let large = PageQuery::builder().page_size(100).build();
        assert_eq!(service.list_page(&large).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn test_negative_page_returns_first_page() {
        let (service, stored) = service_with((0..7).map(|_| new_feedback(None, 3))).await;
        let query = PageQuery::builder().page(-4).page_size(5).build();

        let result = service.page(&query).await.unwrap();

        assert!(result.is_first_page());
        assert!(!result.is_last_page());
        assert_eq!(result.documents()[0], stored[6]);
    }

    #[tokio::test]
    async fn test_customer_filter_takes_precedence_over_rating() {
        let (service, _) = service_with([
            new_feedback(Some("Ann"), 4),
            new_feedback(Some("Ann"), 2),
            new_feedback(Some("Bob"), 4),
        ])
        .await;
        let query = PageQuery::builder()
            .customer(Some("Ann".to_string()))
            .rating(Some(4))
            .build();

        let result = service.page(&query).await.unwrap();

        assert_eq!(result.total_documents(), 2);
        assert!(result
            .documents()
            .iter()
            .all(|f| f.customer() == Some("Ann")));
    }

    #[tokio::test]
    async fn test_rating_filter() {
        let (service, _) = service_with([
            new_feedback(Some("Ann"), 4),
            new_feedback(Some("Ann"), 2),
            new_feedback(Some("Bob"), 4),
        ])
        .await;
        let query = PageQuery::builder().rating(Some(4)).build();

        let result = service.page(&query).await.unwrap();

        assert_eq!(result.total_documents(), 2);
        assert!(result.documents().iter().all(|f| f.rating() == 4));
    }

    #[tokio::test]
    async fn test_product_filter_combines_with_customer() {
        let toaster = NewFeedback::builder()
            .rating(1)
            .customer(Some("Ann".to_string()))
            .product("Toaster")
            .vendor("Acme")
            .build();
        let (service, stored) =
            service_with([new_feedback(Some("Ann"), 4), toaster, new_feedback(Some("Bob"), 1)])
                .await;
        let query = PageQuery::builder()
            .customer(Some("Ann".to_string()))
            .product(Some("Toaster".to_string()))
            .build();

        let result = service.page(&query).await.unwrap();

        assert_eq!(result.total_documents(), 1);
        assert_eq!(result.documents(), &stored[1..2]);
    }

    #[tokio::test]
    async fn test_count_matching() {
        let (service, _) = service_with([
            new_feedback(Some("Ann"), 4),
            new_feedback(Some("Bob"), 4),
            new_feedback(None, 1),
        ])
        .await;

        assert_eq!(
            service
                .count_matching(&FeedbackFilter::default())
                .await
                .unwrap(),
            3
        );
        assert_eq!(
            service
                .count_matching(&FeedbackFilter::builder().rating(Some(4)).build())
                .await
                .unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (service, stored) = service_with([new_feedback(Some("Ann"), 4)]).await;

        let found = service
            .get_by_id(&stored[0].id().to_string())
            .await
            .unwrap();
        assert_eq!(found.as_ref(), Some(&stored[0]));

        assert_eq!(service.get_by_id("not-a-valid-id").await.unwrap(), None);
        assert_eq!(
            service
                .get_by_id(&FeedbackId::generate().to_string())
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let (service, stored) = service_with([new_feedback(Some("Ann"), 4)]).await;
        let id = stored[0].id();

        service
            .replace(id, new_feedback(Some("Ann"), 1))
            .await
            .unwrap();
        let replaced = service.get_by_id(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(replaced.rating(), 1);
        assert_eq!(replaced.id(), id);

        service.delete(id).await.unwrap();
        assert_eq!(service.get_by_id(&id.to_string()).await.unwrap(), None);

        service.delete(id).await.unwrap();
        service
            .replace(id, new_feedback(Some("Ann"), 5))
            .await
            .unwrap();
        assert_eq!(
            service
                .count_matching(&FeedbackFilter::default())
                .await
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_resolve_filter() {
        let query = PageQuery::builder()
            .customer(Some("Ann".to_string()))
            .rating(Some(4))
            .product(Some("Kettle".to_string()))
            .build();
        let filter = resolve_filter(&query);

        assert_eq!(filter.customer(), Some("Ann"));
        assert_eq!(filter.rating(), None);
        assert_eq!(filter.product(), Some("Kettle"));

        assert!(resolve_filter(&PageQuery::builder().build()).is_empty());
    }
}
