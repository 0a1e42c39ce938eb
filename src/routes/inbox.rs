use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        inbox_dto::InboxSubmission,
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::inbox::InboxMessage,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/inbox",
    responses(
        (status = 200, description = "Messages that have not been deleted", body = Json<Vec<InboxMessage>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_messages(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<impl IntoResponse> {
    let messages = state.inbox_service.list().await?;
    Ok(Json(messages))
}

#[utoipa::path(
    get,
    path = "/api/inbox/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches sender, email, phone, message or topic"),
        ("topic_id" = Option<i32>, Query, description = "Filter by topic"),
        ("date" = Option<String>, Query, description = "Received day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching messages", body = Json<ApiResponse<Vec<InboxMessage>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_messages(
    State(state): State<AppState>,
    _claims: Claims,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let messages = state.inbox_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", messages)))
}

#[utoipa::path(
    get,
    path = "/api/inbox/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message found", body = Json<InboxMessage>),
        (status = 404, description = "Message not found or deleted")
    )
)]
#[axum::debug_handler]
pub async fn get_message(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let message = state.inbox_service.get_by_id(id).await?;
    Ok(Json(message))
}

/// Public contact form. Rate limited.
#[utoipa::path(
    post,
    path = "/api/inbox",
    request_body = InboxSubmission,
    responses(
        (status = 201, description = "Message received", body = Json<ApiResponse<InboxMessage>>),
        (status = 400, description = "Invalid payload or unknown topic"),
        (status = 429, description = "Too many submissions")
    )
)]
#[axum::debug_handler]
pub async fn submit_message(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<InboxSubmission>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let message = state.inbox_service.submit(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Message sent successfully", message)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/inbox/{id}/read",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked as read", body = Json<ApiResponse<InboxMessage>>),
        (status = 404, description = "Message not found or deleted")
    )
)]
#[axum::debug_handler]
pub async fn mark_message_read(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let message = state
        .inbox_service
        .mark_read(id, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Message marked as read", message)))
}

#[utoipa::path(
    delete,
    path = "/api/inbox/{id}",
    params(
        ("id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message hidden; the row is kept with deleteflag set"),
        (status = 404, description = "Message not found or already deleted")
    )
)]
#[axum::debug_handler]
pub async fn delete_message(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state
        .inbox_service
        .soft_delete(id, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::message("Message deleted successfully")))
}
