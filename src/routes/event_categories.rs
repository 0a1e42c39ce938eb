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
    models::event_category::EventCategory,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/event-categories",
    responses(
        (status = 200, description = "All event categorys", body = Json<Vec<EventCategory>>)
    )
)]
#[axum::debug_handler]
pub async fn list_event_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.event_category_service.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/event-categories/search",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of the name"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching event categorys", body = Json<ApiResponse<Vec<EventCategory>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_event_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.event_category_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", items)))
}

#[utoipa::path(
    get,
    path = "/api/event-categories/{id}",
    params(
        ("id" = i32, Path, description = "Event category ID")
    ),
    responses(
        (status = 200, description = "Event category found", body = Json<EventCategory>),
        (status = 404, description = "Event category not found")
    )
)]
#[axum::debug_handler]
pub async fn get_event_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.event_category_service.get_by_id(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/event-categories",
    request_body = NamePayload,
    responses(
        (status = 201, description = "Event category created", body = Json<ApiResponse<EventCategory>>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_event_category(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<NamePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .event_category_service
        .create(payload, claims.user_id()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Event category created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/event-categories/{id}",
    params(
        ("id" = i32, Path, description = "Event category ID")
    ),
    request_body = NamePayload,
    responses(
        (status = 200, description = "Event category updated", body = Json<ApiResponse<EventCategory>>),
        (status = 404, description = "Event category not found")
    )
)]
#[axum::debug_handler]
pub async fn update_event_category(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<NamePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .event_category_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Event category updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/event-categories/{id}",
    params(
        ("id" = i32, Path, description = "Event category ID")
    ),
    responses(
        (status = 200, description = "Event category deleted"),
        (status = 400, description = "Still referenced"),
        (status = 404, description = "Event category not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_event_category(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.event_category_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Event category deleted successfully")))
}
