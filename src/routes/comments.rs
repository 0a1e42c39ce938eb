use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        comment_dto::CommentPayload,
    },
    error::Result,
    middleware::{
        auth::{Claims, MaybeClaims},
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::comment::Comment,
    utils::validation::STATUS_ACTIVE,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "All testimonials for admins, active ones otherwise", body = Json<Vec<Comment>>)
    )
)]
#[axum::debug_handler]
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: MaybeClaims,
) -> Result<impl IntoResponse> {
    let comments = if viewer.is_admin() {
        state.comment_service.list().await?
    } else {
        state.comment_service.list_active().await?
    };
    Ok(Json(comments))
}

#[utoipa::path(
    get,
    path = "/api/comments/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches author, content or job title"),
        ("job_title_id" = Option<i32>, Query, description = "Filter by job title"),
        ("status" = Option<String>, Query, description = "Active or inActive; always Active without a token"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching testimonials", body = Json<ApiResponse<Vec<Comment>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_comments(
    State(state): State<AppState>,
    viewer: MaybeClaims,
    ApiQuery(mut query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    if !viewer.is_admin() {
        query.status = Some(STATUS_ACTIVE.to_string());
    }
    let comments = state.comment_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", comments)))
}

#[utoipa::path(
    get,
    path = "/api/comments/active",
    responses(
        (status = 200, description = "Testimonials shown on the public site", body = Json<Vec<Comment>>)
    )
)]
#[axum::debug_handler]
pub async fn list_active_comments(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let comments = state.comment_service.list_active().await?;
    Ok(Json(comments))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment found", body = Json<Comment>),
        (status = 404, description = "Comment not found")
    )
)]
#[axum::debug_handler]
pub async fn get_comment(
    State(state): State<AppState>,
    viewer: MaybeClaims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let comment = if viewer.is_admin() {
        state.comment_service.get_by_id(id).await?
    } else {
        state.comment_service.get_active(id).await?
    };
    Ok(Json(comment))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CommentPayload,
    responses(
        (status = 201, description = "Comment created", body = Json<ApiResponse<Comment>>),
        (status = 400, description = "Invalid payload or unknown job title"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_comment(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<CommentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let comment = state.comment_service.create(payload, claims.user_id()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Comment created successfully", comment)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = CommentPayload,
    responses(
        (status = 200, description = "Comment updated", body = Json<ApiResponse<Comment>>),
        (status = 404, description = "Comment not found")
    )
)]
#[axum::debug_handler]
pub async fn update_comment(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<CommentPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let comment = state
        .comment_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Comment updated successfully", comment)))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 404, description = "Comment not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_comment(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.comment_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Comment deleted successfully")))
}
