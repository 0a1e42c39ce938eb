use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        taxonomy_dto::DepartmentTypePayload,
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
    models::department_type::DepartmentType,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/department-types",
    responses(
        (status = 200, description = "All department types", body = Json<Vec<DepartmentType>>)
    )
)]
#[axum::debug_handler]
pub async fn list_department_types(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.department_type_service.list().await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/department-types/search",
    params(
        ("keyword" = Option<String>, Query, description = "Substring of the name"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching department types", body = Json<ApiResponse<Vec<DepartmentType>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_department_types(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.department_type_service.search(&query).await?;
    Ok(Json(ApiResponse::success("Search completed", items)))
}

#[utoipa::path(
    get,
    path = "/api/department-types/{id}",
    params(
        ("id" = i32, Path, description = "Department type ID")
    ),
    responses(
        (status = 200, description = "Department type found", body = Json<DepartmentType>),
        (status = 404, description = "Department type not found")
    )
)]
#[axum::debug_handler]
pub async fn get_department_type(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.department_type_service.get_by_id(id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/api/department-types",
    request_body = DepartmentTypePayload,
    responses(
        (status = 201, description = "Department type created", body = Json<ApiResponse<DepartmentType>>),
        (status = 400, description = "Invalid payload or duplicate name"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_department_type(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<DepartmentTypePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .department_type_service
        .create(payload, claims.user_id()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Department type created successfully", item)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/department-types/{id}",
    params(
        ("id" = i32, Path, description = "Department type ID")
    ),
    request_body = DepartmentTypePayload,
    responses(
        (status = 200, description = "Department type updated", body = Json<ApiResponse<DepartmentType>>),
        (status = 404, description = "Department type not found")
    )
)]
#[axum::debug_handler]
pub async fn update_department_type(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<DepartmentTypePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let item = state
        .department_type_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("Department type updated successfully", item)))
}

#[utoipa::path(
    delete,
    path = "/api/department-types/{id}",
    params(
        ("id" = i32, Path, description = "Department type ID")
    ),
    responses(
        (status = 200, description = "Department type deleted"),
        (status = 400, description = "Protected or still referenced"),
        (status = 404, description = "Department type not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_department_type(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.department_type_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Department type deleted successfully")))
}
