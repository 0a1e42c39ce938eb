use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        intern_dto::{InternPayload, InternResponse},
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/interns",
    responses(
        (status = 200, description = "All internships with their tags", body = Json<Vec<InternResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_interns(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let interns = state.intern_service.list().await?;
    Ok(Json(interns))
}

#[utoipa::path(
    get,
    path = "/api/interns/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches title, description, requirements or duration"),
        ("job_title_id" = Option<i32>, Query, description = "Filter by job title"),
        ("status" = Option<String>, Query, description = "Active or inActive"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching internships", body = Json<ApiResponse<Vec<InternResponse>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_interns(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let interns = state.intern_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", interns)))
}

#[utoipa::path(
    get,
    path = "/api/interns/{id}",
    params(
        ("id" = i32, Path, description = "Internship ID")
    ),
    responses(
        (status = 200, description = "Internship found", body = Json<InternResponse>),
        (status = 404, description = "Internship not found")
    )
)]
#[axum::debug_handler]
pub async fn get_intern(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> Result<impl IntoResponse> {
    let intern = state.intern_service.get_by_id(id).await?;
    Ok(Json(intern))
}

#[utoipa::path(
    post,
    path = "/api/interns",
    request_body = InternPayload,
    responses(
        (status = 201, description = "Internship created with its tags", body = Json<ApiResponse<InternResponse>>),
        (status = 400, description = "Invalid payload or unknown tag"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_intern(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<InternPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let intern = state.intern_service.create(payload, claims.user_id()?).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Internship created successfully", intern)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/interns/{id}",
    params(
        ("id" = i32, Path, description = "Internship ID")
    ),
    request_body = InternPayload,
    responses(
        (status = 200, description = "Internship and tags replaced", body = Json<ApiResponse<InternResponse>>),
        (status = 404, description = "Internship not found")
    )
)]
#[axum::debug_handler]
pub async fn update_intern(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<InternPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let intern = state
        .intern_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Internship updated successfully", intern)))
}

#[utoipa::path(
    delete,
    path = "/api/interns/{id}",
    params(
        ("id" = i32, Path, description = "Internship ID")
    ),
    responses(
        (status = 200, description = "Internship deleted"),
        (status = 404, description = "Internship not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_intern(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.intern_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Internship deleted successfully")))
}
