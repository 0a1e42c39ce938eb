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
        solution_dto::{SolutionForm, SolutionResponse},
    },
    error::Result,
    middleware::{auth::Claims, base_url::RequestBaseUrl},
    services::solution_service::SolutionWithImages,
    middleware::extract::{ApiPath, ApiQuery},
    AppState,
};

const IMAGES_FIELD: &str = "images";

fn respond(item: SolutionWithImages, base: &RequestBaseUrl) -> SolutionResponse {
    let (solution, images) = item;
    SolutionResponse::new(solution, images, base)
}

fn respond_all(items: Vec<SolutionWithImages>, base: &RequestBaseUrl) -> Vec<SolutionResponse> {
    items.into_iter().map(|item| respond(item, base)).collect()
}

#[utoipa::path(
    get,
    path = "/api/solutions",
    responses(
        (status = 200, description = "All solutions with their galleries", body = Json<Vec<SolutionResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_solutions(
    State(state): State<AppState>,
    base: RequestBaseUrl,
) -> Result<impl IntoResponse> {
    let items = state.solution_service.list().await?;
    Ok(Json(respond_all(items, &base)))
}

#[utoipa::path(
    get,
    path = "/api/solutions/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches title, description or department"),
        ("department_type_id" = Option<i32>, Query, description = "Filter by department"),
        ("date" = Option<String>, Query, description = "Creation day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching solutions", body = Json<ApiResponse<Vec<SolutionResponse>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_solutions(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.solution_service.search(&query).await?;
    Ok(Json(ApiResponse::success(
        "Search completed",
        respond_all(items, &base),
    )))
}

#[utoipa::path(
    get,
    path = "/api/solutions/{id}",
    params(
        ("id" = i32, Path, description = "Solution ID")
    ),
    responses(
        (status = 200, description = "Solution found", body = Json<SolutionResponse>),
        (status = 404, description = "Solution not found")
    )
)]
#[axum::debug_handler]
pub async fn get_solution(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.solution_service.get_by_id(id).await?;
    Ok(Json(respond(item, &base)))
}

/// Multipart fields: `title`, `description`, `department_type_id`, repeated `images`.
#[utoipa::path(
    post,
    path = "/api/solutions",
    responses(
        (status = 201, description = "Solution created; the first image is the cover", body = Json<ApiResponse<SolutionResponse>>),
        (status = 400, description = "Invalid fields or images"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_solution(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let images = form.take_files(IMAGES_FIELD);
    let payload = SolutionForm::from_form(&form)?;
    payload.validate()?;

    let item = state.solution_service.create(payload, images, actor).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Solution created successfully",
            respond(item, &base),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/solutions/{id}",
    params(
        ("id" = i32, Path, description = "Solution ID")
    ),
    responses(
        (status = 200, description = "Solution updated; new images are appended", body = Json<ApiResponse<SolutionResponse>>),
        (status = 404, description = "Solution not found")
    )
)]
#[axum::debug_handler]
pub async fn update_solution(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let images = form.take_files(IMAGES_FIELD);
    let payload = SolutionForm::from_form(&form)?;
    payload.validate()?;

    let item = state
        .solution_service
        .update(id, payload, images, actor)
        .await?;
    Ok(Json(ApiResponse::success(
        "Solution updated successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/solutions/{id}",
    params(
        ("id" = i32, Path, description = "Solution ID")
    ),
    responses(
        (status = 200, description = "Solution and its images deleted"),
        (status = 404, description = "Solution not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_solution(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.solution_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Solution deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/api/solutions/{id}/images",
    params(
        ("id" = i32, Path, description = "Solution ID")
    ),
    responses(
        (status = 200, description = "Images appended", body = Json<ApiResponse<SolutionResponse>>),
        (status = 400, description = "No images or invalid images")
    )
)]
#[axum::debug_handler]
pub async fn add_solution_images(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let images = form.take_files(IMAGES_FIELD);
    let item = state.solution_service.append_images(id, images).await?;
    Ok(Json(ApiResponse::success(
        "Images added successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/solutions/images/{image_id}",
    params(
        ("image_id" = i32, Path, description = "Solution image ID")
    ),
    responses(
        (status = 200, description = "Image deleted; the next image becomes cover if needed", body = Json<ApiResponse<SolutionResponse>>),
        (status = 404, description = "Image not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_solution_image(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(image_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.solution_service.delete_image(image_id).await?;
    Ok(Json(ApiResponse::success(
        "Image deleted successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    put,
    path = "/api/solutions/images/{image_id}/cover",
    params(
        ("image_id" = i32, Path, description = "Solution image ID")
    ),
    responses(
        (status = 200, description = "Cover image changed", body = Json<ApiResponse<SolutionResponse>>),
        (status = 404, description = "Image not found")
    )
)]
#[axum::debug_handler]
pub async fn set_solution_cover(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(image_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.solution_service.set_cover(image_id).await?;
    Ok(Json(ApiResponse::success(
        "Cover image updated successfully",
        respond(item, &base),
    )))
}
