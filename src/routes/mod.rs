pub mod comments;
pub mod company_profile;
pub mod department_types;
pub mod event_categories;
pub mod events;
pub mod health;
pub mod inbox;
pub mod interns;
pub mod job_titles;
pub mod jobs;
pub mod partners;
pub mod solutions;
pub mod tech_stack_tags;
pub mod topics;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    middleware::{
        cors::permissive_cors,
        rate_limit::{new_rps_state, rps_middleware},
    },
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        users::login,
        users::me,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::change_password,
        users::delete_user,
        department_types::list_department_types,
        department_types::search_department_types,
        department_types::get_department_type,
        department_types::create_department_type,
        department_types::update_department_type,
        department_types::delete_department_type,
        job_titles::list_job_titles,
        job_titles::search_job_titles,
        job_titles::get_job_title,
        job_titles::create_job_title,
        job_titles::update_job_title,
        job_titles::delete_job_title,
        tech_stack_tags::list_tech_stack_tags,
        tech_stack_tags::search_tech_stack_tags,
        tech_stack_tags::get_tech_stack_tag,
        tech_stack_tags::create_tech_stack_tag,
        tech_stack_tags::update_tech_stack_tag,
        tech_stack_tags::delete_tech_stack_tag,
        topics::list_topics,
        topics::search_topics,
        topics::get_topic,
        topics::create_topic,
        topics::update_topic,
        topics::delete_topic,
        event_categories::list_event_categories,
        event_categories::search_event_categories,
        event_categories::get_event_category,
        event_categories::create_event_category,
        event_categories::update_event_category,
        event_categories::delete_event_category,
        jobs::list_jobs,
        jobs::search_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        interns::list_interns,
        interns::search_interns,
        interns::get_intern,
        interns::create_intern,
        interns::update_intern,
        interns::delete_intern,
        partners::list_partners,
        partners::search_partners,
        partners::get_partner,
        partners::create_partner,
        partners::update_partner,
        partners::delete_partner,
        solutions::list_solutions,
        solutions::search_solutions,
        solutions::get_solution,
        solutions::create_solution,
        solutions::update_solution,
        solutions::delete_solution,
        solutions::add_solution_images,
        solutions::delete_solution_image,
        solutions::set_solution_cover,
        events::list_events,
        events::search_events,
        events::get_event,
        events::create_event,
        events::update_event,
        events::delete_event,
        events::add_event_images,
        events::delete_event_image,
        events::set_event_cover,
        comments::list_comments,
        comments::list_active_comments,
        comments::search_comments,
        comments::get_comment,
        comments::create_comment,
        comments::update_comment,
        comments::delete_comment,
        inbox::list_messages,
        inbox::search_messages,
        inbox::get_message,
        inbox::submit_message,
        inbox::mark_message_read,
        inbox::delete_message,
        company_profile::get_company_profile,
        company_profile::update_company_profile,
    ),
    info(title = "Corporate site CMS API")
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the full application: every API group, the upload directory and the
/// shared tower layers.
pub fn router(state: AppState) -> Router {
    let public_writes = new_rps_state(state.config.public_rps);
    let body_limit = state.config.body_limit();
    let uploads = ServeDir::new(state.config.uploads_dir.clone());

    let users_api = Router::new()
        .route("/api/users/login", post(users::login))
        .route("/api/users/me", get(users::me))
        .route("/api/users/change-password", put(users::change_password))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let taxonomy_api = Router::new()
        .route(
            "/api/department-types",
            get(department_types::list_department_types)
                .post(department_types::create_department_type),
        )
        .route(
            "/api/department-types/search",
            get(department_types::search_department_types),
        )
        .route(
            "/api/department-types/:id",
            get(department_types::get_department_type)
                .put(department_types::update_department_type)
                .delete(department_types::delete_department_type),
        )
        .route(
            "/api/job-titles",
            get(job_titles::list_job_titles).post(job_titles::create_job_title),
        )
        .route("/api/job-titles/search", get(job_titles::search_job_titles))
        .route(
            "/api/job-titles/:id",
            get(job_titles::get_job_title)
                .put(job_titles::update_job_title)
                .delete(job_titles::delete_job_title),
        )
        .route(
            "/api/tech-stack-tags",
            get(tech_stack_tags::list_tech_stack_tags)
                .post(tech_stack_tags::create_tech_stack_tag),
        )
        .route(
            "/api/tech-stack-tags/search",
            get(tech_stack_tags::search_tech_stack_tags),
        )
        .route(
            "/api/tech-stack-tags/:id",
            get(tech_stack_tags::get_tech_stack_tag)
                .put(tech_stack_tags::update_tech_stack_tag)
                .delete(tech_stack_tags::delete_tech_stack_tag),
        )
        .route(
            "/api/topic",
            get(topics::list_topics).post(topics::create_topic),
        )
        .route("/api/topic/search", get(topics::search_topics))
        .route(
            "/api/topic/:id",
            get(topics::get_topic)
                .put(topics::update_topic)
                .delete(topics::delete_topic),
        )
        .route(
            "/api/event-categories",
            get(event_categories::list_event_categories)
                .post(event_categories::create_event_category),
        )
        .route(
            "/api/event-categories/search",
            get(event_categories::search_event_categories),
        )
        .route(
            "/api/event-categories/:id",
            get(event_categories::get_event_category)
                .put(event_categories::update_event_category)
                .delete(event_categories::delete_event_category),
        );

    let postings_api = Router::new()
        .route("/api/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/api/jobs/search", get(jobs::search_jobs))
        .route(
            "/api/jobs/:id",
            get(jobs::get_job).put(jobs::update_job).delete(jobs::delete_job),
        )
        .route(
            "/api/interns",
            get(interns::list_interns).post(interns::create_intern),
        )
        .route("/api/interns/search", get(interns::search_interns))
        .route(
            "/api/interns/:id",
            get(interns::get_intern)
                .put(interns::update_intern)
                .delete(interns::delete_intern),
        );

    let media_api = Router::new()
        .route(
            "/api/partners",
            get(partners::list_partners).post(partners::create_partner),
        )
        .route("/api/partners/search", get(partners::search_partners))
        .route(
            "/api/partners/:id",
            get(partners::get_partner)
                .put(partners::update_partner)
                .delete(partners::delete_partner),
        )
        .route(
            "/api/solutions",
            get(solutions::list_solutions).post(solutions::create_solution),
        )
        .route("/api/solutions/search", get(solutions::search_solutions))
        .route(
            "/api/solutions/:id",
            get(solutions::get_solution)
                .put(solutions::update_solution)
                .delete(solutions::delete_solution),
        )
        .route(
            "/api/solutions/:id/images",
            post(solutions::add_solution_images),
        )
        .route(
            "/api/solutions/images/:image_id",
            delete(solutions::delete_solution_image),
        )
        .route(
            "/api/solutions/images/:image_id/cover",
            put(solutions::set_solution_cover),
        )
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/events/search", get(events::search_events))
        .route(
            "/api/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/api/events/:id/images", post(events::add_event_images))
        .route(
            "/api/events/images/:image_id",
            delete(events::delete_event_image),
        )
        .route(
            "/api/events/images/:image_id/cover",
            put(events::set_event_cover),
        );

    let site_api = Router::new()
        .route(
            "/api/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/comments/active", get(comments::list_active_comments))
        .route("/api/comments/search", get(comments::search_comments))
        .route(
            "/api/comments/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
        .route(
            "/api/inbox",
            get(inbox::list_messages).merge(
                post(inbox::submit_message)
                    .layer(from_fn_with_state(public_writes, rps_middleware)),
            ),
        )
        .route("/api/inbox/search", get(inbox::search_messages))
        .route(
            "/api/inbox/:id",
            get(inbox::get_message).delete(inbox::delete_message),
        )
        .route("/api/inbox/:id/read", put(inbox::mark_message_read))
        .route(
            "/api/companyprofile",
            get(company_profile::get_company_profile)
                .put(company_profile::update_company_profile),
        );

    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi))
        .merge(users_api)
        .merge(taxonomy_api)
        .merge(postings_api)
        .merge(media_api)
        .merge(site_api)
        .nest_service("/uploads", uploads)
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
}
