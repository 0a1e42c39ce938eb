use tower_http::cors::{Any, CorsLayer};

/// The public site and the admin panel are served from other origins.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
}
