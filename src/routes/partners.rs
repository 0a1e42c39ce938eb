use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{
        common::{ApiResponse, SearchQuery},
        form::MultipartForm,
        partner_dto::{PartnerForm, PartnerResponse},
    },
    error::Result,
    middleware::{auth::Claims, base_url::RequestBaseUrl},
    models::partner::Partner,
    middleware::extract::{ApiPath, ApiQuery},
    AppState,
};

fn project(partners: Vec<Partner>, base: &RequestBaseUrl) -> Vec<PartnerResponse> {
    partners
        .into_iter()
        .map(|p| PartnerResponse::new(p, base))
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/partners",
    responses(
        (status = 200, description = "All partners with absolute logo URLs", body = Json<Vec<PartnerResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_partners(
    State(state): State<AppState>,
    base: RequestBaseUrl,
) -> Result<impl IntoResponse> {
    let partners = state.partner_service.list().await?;
    Ok(Json(project(partners, &base)))
}

#[utoipa::path(
    get,
    path = "/api/partners/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches partner or department name"),
        ("department_type_id" = Option<i32>, Query, description = "Filter by department"),
        ("status" = Option<String>, Query, description = "Active or inActive"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching partners", body = Json<ApiResponse<Vec<PartnerResponse>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_partners(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let partners = state.partner_service.search(&query).await?;
    Ok(Json(ApiResponse::success(
        "Search completed",
        project(partners, &base),
    )))
}

#[utoipa::path(
    get,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Partner found", body = Json<PartnerResponse>),
        (status = 404, description = "Partner not found")
    )
)]
#[axum::debug_handler]
pub async fn get_partner(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let partner = state.partner_service.get_by_id(id).await?;
    Ok(Json(PartnerResponse::new(partner, &base)))
}

/// Multipart fields: `name`, `status`, `department_type_id`, optional `image`.
#[utoipa::path(
    post,
    path = "/api/partners",
    responses(
        (status = 201, description = "Partner created", body = Json<ApiResponse<PartnerResponse>>),
        (status = 400, description = "Invalid fields, or image too large or not an image"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_partner(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let image = form.take_file("image");
    let payload = PartnerForm::from_form(&form)?;
    payload.validate()?;

    let partner = state.partner_service.create(payload, image, actor).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Partner created successfully",
            PartnerResponse::new(partner, &base),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Partner updated; a new image replaces the old file", body = Json<ApiResponse<PartnerResponse>>),
        (status = 404, description = "Partner not found")
    )
)]
#[axum::debug_handler]
pub async fn update_partner(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let image = form.take_file("image");
    let payload = PartnerForm::from_form(&form)?;
    payload.validate()?;

    let partner = state
        .partner_service
        .update(id, payload, image, actor)
        .await?;
    Ok(Json(ApiResponse::success(
        "Partner updated successfully",
        PartnerResponse::new(partner, &base),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/partners/{id}",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Partner and its image deleted"),
        (status = 404, description = "Partner not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_partner(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.partner_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Partner deleted successfully")))
}
