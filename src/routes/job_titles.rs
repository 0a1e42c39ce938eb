use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        taxonomy_dto::JobTitlePayload,
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::job_title::JobTitle,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/job-titles",
    responses(
        (status = 200, description = "All job titles", body = Json<Vec<JobTitle>>)
    )
)]
#[axum::debug_handler]
pub async fn list_job_titles(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.job_title_service.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/job-titles/search",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of the name"),
        ("department_type_id" = Option<i32>, Query, description = "Owning department"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching job titles", body = Json<ApiResponse<Vec<JobTitle>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_job_titles(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.job_title_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", items)))
}

#[utoipa::path(
    get,
    path = "/api/job-titles/{id}",
    params(
        ("id" = i32, Path, description = "Job title ID")
    ),
    responses(
        (status = 200, description = "Job title found", body = Json<JobTitle>),
        (status = 404, description = "Job title not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job_title(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.job_title_service.get_by_id(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/job-titles",
    request_body = JobTitlePayload,
    responses(
        (status = 201, description = "Job title created", body = Json<ApiResponse<JobTitle>>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_job_title(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<JobTitlePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .job_title_service
        .create(payload, claims.user_id()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Job title created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/job-titles/{id}",
    params(
        ("id" = i32, Path, description = "Job title ID")
    ),
    request_body = JobTitlePayload,
    responses(
        (status = 200, description = "Job title updated", body = Json<ApiResponse<JobTitle>>),
        (status = 404, description = "Job title not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job_title(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<JobTitlePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .job_title_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Job title updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/job-titles/{id}",
    params(
        ("id" = i32, Path, description = "Job title ID")
    ),
    responses(
        (status = 200, description = "Job title deleted"),
        (status = 400, description = "Still referenced"),
        (status = 404, description = "Job title not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job_title(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.job_title_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Job title deleted successfully")))
}
