pub mod comment_dto;
pub mod common;
pub mod company_profile_dto;
pub mod event_dto;
pub mod form;
pub mod gallery_dto;
pub mod inbox_dto;
pub mod intern_dto;
pub mod job_dto;
pub mod partner_dto;
pub mod solution_dto;
pub mod taxonomy_dto;
pub mod user_dto;
