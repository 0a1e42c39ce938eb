use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        taxonomy_dto::NamePayload,
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::topic::Topic,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/topic",
    responses(
        (status = 200, description = "All topics", body = Json<Vec<Topic>>)
    )
)]
#[axum::debug_handler]
pub async fn list_topics(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.topic_service.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/topic/search",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of the name"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching topics", body = Json<ApiResponse<Vec<Topic>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_topics(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.topic_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", items)))
}

#[utoipa::path(
    get,
    path = "/api/topic/{id}",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic found", body = Json<Topic>),
        (status = 404, description = "Topic not found")
    )
)]
#[axum::debug_handler]
pub async fn get_topic(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.topic_service.get_by_id(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/topic",
    request_body = NamePayload,
    responses(
        (status = 201, description = "Topic created", body = Json<ApiResponse<Topic>>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_topic(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<NamePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .topic_service
        .create(payload, claims.user_id()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Topic created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/topic/{id}",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    request_body = NamePayload,
    responses(
        (status = 200, description = "Topic updated", body = Json<ApiResponse<Topic>>),
        (status = 404, description = "Topic not found")
    )
)]
#[axum::debug_handler]
pub async fn update_topic(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<NamePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .topic_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Topic updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/topic/{id}",
    params(
        ("id" = i32, Path, description = "Topic ID")
    ),
    responses(
        (status = 200, description = "Topic deleted"),
        (status = 400, description = "Still referenced"),
        (status = 404, description = "Topic not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_topic(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.topic_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Topic deleted successfully")))
}
