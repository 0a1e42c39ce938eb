use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::ApiResponse,
        user_dto::{
            ChangePasswordPayload, CreateUserPayload, LoginRequest, LoginResponse,
            UpdateUserPayload, UserResponse,
        },
    },
    error::Result,
    middleware::{
        auth::Claims,
        extract::{ApiJson, ApiPath},
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued", body = Json<ApiResponse<LoginResponse>>),
        (status = 401, description = "Invalid username or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let session = state.user_service.login(payload).await?;
    Ok(Json(ApiResponse::success("Login successful", session)))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "The authenticated admin", body = Json<UserResponse>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn me(State(state): State<AppState>, claims: Claims) -> Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(claims.user_id()?).await?;
    Ok(Json(user))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Active admin users", body = Json<Vec<UserResponse>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_users(
    State(state): State<AppState>,
    _claims: Claims,
) -> Result<impl IntoResponse> {
    let users = state.user_service.list().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = Json<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "User created", body = Json<ApiResponse<UserResponse>>),
        (status = 400, description = "Invalid payload or username taken")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<CreateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .create(payload, Some(claims.user_id()?))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("User created successfully", user)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserPayload,
    responses(
        (status = 200, description = "User updated", body = Json<ApiResponse<UserResponse>>),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .update(id, payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success("User updated successfully", user)))
}

#[utoipa::path(
    put,
    path = "/api/users/change-password",
    request_body = ChangePasswordPayload,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Current password is incorrect")
    )
)]
#[axum::debug_handler]
pub async fn change_password(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<ChangePasswordPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .user_service
        .change_password(claims.user_id()?, payload)
        .await?;
    Ok(Json(ApiResponse::message("Password changed successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deactivated"),
        (status = 400, description = "Cannot delete your own account"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state
        .user_service
        .soft_delete(id, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::message("User deleted successfully")))
}
