use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        taxonomy_dto::TechStackTagPayload,
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::tech_stack_tag::TechStackTag,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/tech-stack-tags",
    responses(
        (status = 200, description = "All tech stack tags", body = Json<Vec<TechStackTag>>)
    )
)]
#[axum::debug_handler]
pub async fn list_tech_stack_tags(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.tech_stack_tag_service.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/tech-stack-tags/search",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of the name"),
        ("department_type_id" = Option<i32>, Query, description = "Owning department"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching tech stack tags", body = Json<ApiResponse<Vec<TechStackTag>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_tech_stack_tags(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.tech_stack_tag_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", items)))
}

#[utoipa::path(
    get,
    path = "/api/tech-stack-tags/{id}",
    params(
        ("id" = i32, Path, description = "Tech stack tag ID")
    ),
    responses(
        (status = 200, description = "Tech stack tag found", body = Json<TechStackTag>),
        (status = 404, description = "Tech stack tag not found")
    )
)]
#[axum::debug_handler]
pub async fn get_tech_stack_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.tech_stack_tag_service.get_by_id(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/tech-stack-tags",
    request_body = TechStackTagPayload,
    responses(
        (status = 201, description = "Tech stack tag created", body = Json<ApiResponse<TechStackTag>>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_tech_stack_tag(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<TechStackTagPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .tech_stack_tag_service
        .create(payload, claims.user_id()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Tech stack tag created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/tech-stack-tags/{id}",
    params(
        ("id" = i32, Path, description = "Tech stack tag ID")
    ),
    request_body = TechStackTagPayload,
    responses(
        (status = 200, description = "Tech stack tag updated", body = Json<ApiResponse<TechStackTag>>),
        (status = 404, description = "Tech stack tag not found")
    )
)]
#[axum::debug_handler]
pub async fn update_tech_stack_tag(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<TechStackTagPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .tech_stack_tag_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Tech stack tag updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/tech-stack-tags/{id}",
    params(
        ("id" = i32, Path, description = "Tech stack tag ID")
    ),
    responses(
        (status = 200, description = "Tech stack tag deleted"),
        (status = 400, description = "Still referenced"),
        (status = 404, description = "Tech stack tag not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_tech_stack_tag(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.tech_stack_tag_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Tech stack tag deleted successfully")))
}
