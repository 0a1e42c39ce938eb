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
        event_dto::{EventForm, EventResponse},
    },
    error::Result,
    middleware::{auth::Claims, base_url::RequestBaseUrl},
    services::event_service::EventWithImages,
    middleware::extract::{ApiPath, ApiQuery},
    AppState,
};

const IMAGES_FIELD: &str = "images";

fn respond(item: EventWithImages, base: &RequestBaseUrl) -> EventResponse {
    let (event, images) = item;
    EventResponse::new(event, images, base)
}

fn respond_all(items: Vec<EventWithImages>, base: &RequestBaseUrl) -> Vec<EventResponse> {
    items.into_iter().map(|item| respond(item, base)).collect()
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events with their galleries", body = Json<Vec<EventResponse>>)
    )
)]
#[axum::debug_handler]
pub async fn list_events(
    State(state): State<AppState>,
    base: RequestBaseUrl,
) -> Result<impl IntoResponse> {
    let items = state.event_service.list().await?;
    Ok(Json(respond_all(items, &base)))
}

#[utoipa::path(
    get,
    path = "/api/events/search",
    params(
        ("keyword" = Option<String>, Query, description = "Matches title, description, location or category"),
        ("event_category_id" = Option<i32>, Query, description = "Filter by category"),
        ("date" = Option<String>, Query, description = "Event day, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Matching events", body = Json<ApiResponse<Vec<EventResponse>>>)
    )
)]
#[axum::debug_handler]
pub async fn search_events(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<impl IntoResponse> {
    let items = state.event_service.search(&query).await?;
    Ok(Json(ApiResponse::success(
        "Search completed",
        respond_all(items, &base),
    )))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Json<EventResponse>),
        (status = 404, description = "Event not found")
    )
)]
#[axum::debug_handler]
pub async fn get_event(
    State(state): State<AppState>,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.event_service.get_by_id(id).await?;
    Ok(Json(respond(item, &base)))
}

/// Multipart fields: `title`, `description`, `location`, `event_date`,
/// `event_category_id`, repeated `images`.
#[utoipa::path(
    post,
    path = "/api/events",
    responses(
        (status = 201, description = "Event created; the first image is the cover", body = Json<ApiResponse<EventResponse>>),
        (status = 400, description = "Invalid fields or images"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let images = form.take_files(IMAGES_FIELD);
    let payload = EventForm::from_form(&form)?;
    payload.validate()?;

    let item = state.event_service.create(payload, images, actor).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Event created successfully",
            respond(item, &base),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event updated; new images are appended", body = Json<ApiResponse<EventResponse>>),
        (status = 404, description = "Event not found")
    )
)]
#[axum::debug_handler]
pub async fn update_event(
    State(state): State<AppState>,
    claims: Claims,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let actor = claims.user_id()?;
    let images = form.take_files(IMAGES_FIELD);
    let payload = EventForm::from_form(&form)?;
    payload.validate()?;

    let item = state
        .event_service
        .update(id, payload, images, actor)
        .await?;
    Ok(Json(ApiResponse::success(
        "Event updated successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event and its images deleted"),
        (status = 404, description = "Event not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_event(
    State(state): State<AppState>,
    _claims: Claims,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    state.event_service.delete(id).await?;
    Ok(Json(ApiResponse::message("Event deleted successfully")))
}

#[utoipa::path(
    post,
    path = "/api/events/{id}/images",
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Images appended", body = Json<ApiResponse<EventResponse>>),
        (status = 400, description = "No images or invalid images")
    )
)]
#[axum::debug_handler]
pub async fn add_event_images(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(id): ApiPath<i32>,
    mut form: MultipartForm,
) -> Result<impl IntoResponse> {
    let images = form.take_files(IMAGES_FIELD);
    let item = state.event_service.append_images(id, images).await?;
    Ok(Json(ApiResponse::success(
        "Images added successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/events/images/{image_id}",
    params(
        ("image_id" = i32, Path, description = "Event image ID")
    ),
    responses(
        (status = 200, description = "Image deleted; the next image becomes cover if needed", body = Json<ApiResponse<EventResponse>>),
        (status = 404, description = "Image not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_event_image(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(image_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.event_service.delete_image(image_id).await?;
    Ok(Json(ApiResponse::success(
        "Image deleted successfully",
        respond(item, &base),
    )))
}

#[utoipa::path(
    put,
    path = "/api/events/images/{image_id}/cover",
    params(
        ("image_id" = i32, Path, description = "Event image ID")
    ),
    responses(
        (status = 200, description = "Cover image changed", body = Json<ApiResponse<EventResponse>>),
        (status = 404, description = "Image not found")
    )
)]
#[axum::debug_handler]
pub async fn set_event_cover(
    State(state): State<AppState>,
    _claims: Claims,
    base: RequestBaseUrl,
    ApiPath(image_id): ApiPath<i32>,
) -> Result<impl IntoResponse> {
    let item = state.event_service.set_cover(image_id).await?;
    Ok(Json(ApiResponse::success(
        "Cover image updated successfully",
        respond(item, &base),
    )))
}
