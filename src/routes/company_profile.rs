use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{common::ApiResponse, company_profile_dto::CompanyProfilePayload},
    error::Result,
    middleware::{
        auth::Claims,
        extract::ApiJson,
    },
    models::company_profile::CompanyProfile,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/companyprofile",
    responses(
        (status = 200, description = "Company contact and social details", body = Json<CompanyProfile>)
    )
)]
#[axum::debug_handler]
pub async fn get_company_profile(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let profile = state.company_profile_service.get().await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/companyprofile",
    request_body = CompanyProfilePayload,
    responses(
        (status = 200, description = "Company profile saved", body = Json<ApiResponse<CompanyProfile>>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn update_company_profile(
    State(state): State<AppState>,
    claims: Claims,
    ApiJson(payload): ApiJson<CompanyProfilePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state
        .company_profile_service
        .update(payload, claims.user_id()?)
        .await?;
    Ok(Json(ApiResponse::success(
        "Company profile updated successfully",
        profile,
    )))
}
