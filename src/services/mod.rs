pub mod comment_service;
pub mod company_profile_service;
pub mod department_type_service;
pub mod event_category_service;
pub mod event_service;
pub mod gallery;
pub mod inbox_service;
pub mod intern_service;
pub mod job_service;
pub mod job_title_service;
pub mod partner_service;
pub mod search;
pub mod solution_service;
pub mod storage_service;
pub mod tag_link;
pub mod tech_stack_tag_service;
pub mod topic_service;
pub mod user_service;
