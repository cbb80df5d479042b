//! Handlers for link endpoints (list, create, record click).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::{Value, json};
use validator::Validate;

use crate::api::dto::link::{ClickResponse, CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the owner's links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Errors
///
/// Returns 500 Internal Server Error on database errors.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state
        .link_service
        .list_links(&state.owner_id)
        .await
        .map_err(|_| AppError::internal("Failed to list links", Value::Null))?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link for the owner.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "title": "My blog", "url": "https://blog.example.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON or a field is missing or blank.
/// Returns 500 Internal Server Error with a generic message if the link
/// could not be stored.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let (Some(title), Some(url)) = (payload.title, payload.url) else {
        return Err(AppError::bad_request(
            "Title and URL are required.",
            Value::Null,
        ));
    };

    let link = state
        .link_service
        .create_link(&state.owner_id, title, url)
        .await
        .map_err(|e| match e {
            rejected @ AppError::Validation { .. } => rejected,
            _ => AppError::internal("Failed to create link", Value::Null),
        })?;

    tracing::info!(link_id = link.id, owner_id = %link.owner_id, "Link created");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Records one click on a link.
///
/// # Endpoint
///
/// `POST /api/links/{id}/click`
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 404 Not Found if the link does not exist or the increment failed.
pub async fn record_click_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ClickResponse>, AppError> {
    let link_id: i64 = id
        .parse()
        .map_err(|_| AppError::bad_request("Invalid link ID.", json!({ "id": id })))?;

    state
        .link_service
        .record_click(&state.owner_id, link_id)
        .await
        .map_err(|e| {
            tracing::warn!(error = ?e, link_id, "Error recording click");
            AppError::not_found(
                "Link not found or error recording click",
                json!({ "id": link_id }),
            )
        })?;

    Ok(Json(ClickResponse {
        message: "Click recorded".to_string(),
    }))
}
