use crate::application::services::FeedbackService;
use crate::domain::entities::NewFeedback;
use crate::domain::pagination::PageQuery;
use crate::domain::repositories::FeedbackRepository;
use crate::interface::payloads::{FeedbackPayload, ListParams};
use crate::interface::routers::FEEDBACK_PATH;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub(crate) async fn list_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Query(params): Query<ListParams>,
) -> Response {
    let query = PageQuery::from(params);

    match state.page(&query).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!("Failed to list feedback: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn get_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Path(id): Path<String>,
) -> Response {
    match state.get_by_id(&id).await {
        Ok(Some(feedback)) => Json(feedback).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Failed to get feedback {}: {:?}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn create_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Json(payload): Json<FeedbackPayload>,
) -> Response {
    tracing::info!("Called create feedback");

    let feedback = match NewFeedback::try_from(payload) {
        Ok(feedback) => feedback,
        Err(message) => {
            tracing::warn!("Rejected feedback: {}", message);
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    match state.create(feedback).await {
        Ok(feedback) => {
            let location = format!("{}/{}", FEEDBACK_PATH, feedback.id());
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(feedback),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create feedback: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn update_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Path(id): Path<String>,
    Json(payload): Json<FeedbackPayload>,
) -> Response {
    tracing::info!("Called update feedback {}", id);

    let feedback = match NewFeedback::try_from(payload) {
        Ok(feedback) => feedback,
        Err(message) => {
            tracing::warn!("Rejected feedback: {}", message);
            return (StatusCode::BAD_REQUEST, message).into_response();
        }
    };

    let existing = match state.get_by_id(&id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Failed to get feedback {}: {:?}", id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.replace(existing.id(), feedback).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to replace feedback {}: {:?}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub(crate) async fn delete_feedback_handler<R: FeedbackRepository>(
    State(state): State<FeedbackService<R>>,
    Path(id): Path<String>,
) -> Response {
    tracing::info!("Called delete feedback {}", id);

    let existing = match state.get_by_id(&id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Failed to get feedback {}: {:?}", id, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.delete(existing.id()).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete feedback {}: {:?}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
