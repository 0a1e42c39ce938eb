pub mod auth;
pub mod base_url;
pub mod cors;
pub mod extract;
pub mod rate_limit;
