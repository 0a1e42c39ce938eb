pub mod admin_user;
pub mod comment;
pub mod company_profile;
pub mod department_type;
pub mod event;
pub mod event_category;
pub mod gallery_image;
pub mod inbox;
pub mod intern;
pub mod job;
pub mod job_title;
pub mod partner;
pub mod solution;
pub mod tech_stack_tag;
pub mod topic;
