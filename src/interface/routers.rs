use crate::application::services::FeedbackService;
use crate::domain::repositories::FeedbackRepository;
use crate::interface::handlers::{
    create_feedback_handler, delete_feedback_handler, get_feedback_handler,
    list_feedback_handler, update_feedback_handler,
};
use crate::interface::middleware::create_trace_layer;
use axum::routing::get;
use axum::Router;

pub const FEEDBACK_PATH: &str = "/feedback";

/// Routes under [`FEEDBACK_PATH`]. The collection answers with or without a trailing slash.
pub fn create_feedback_router<R>(repo: R) -> Router
where
    R: FeedbackRepository + Clone + 'static,
{
    let state = FeedbackService::builder().repo(repo).build();
    let collection = get(list_feedback_handler::<R>).post(create_feedback_handler::<R>);

    Router::new()
        .route(FEEDBACK_PATH, collection.clone())
        .route(&format!("{}/", FEEDBACK_PATH), collection)
        .route(
            &format!("{}/{{id}}", FEEDBACK_PATH),
            get(get_feedback_handler::<R>)
                .put(update_feedback_handler::<R>)
                .delete(delete_feedback_handler::<R>),
        )
        .with_state(state)
}

/// The feedback resource with request tracing.
pub fn create_app<R>(repo: R) -> Router
where
    R: FeedbackRepository + Clone + 'static,
{
    create_feedback_router(repo).layer(create_trace_layer())
}
