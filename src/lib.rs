pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::config::Config;
use crate::services::{
    comment_service::CommentService, company_profile_service::CompanyProfileService,
    department_type_service::DepartmentTypeService, event_category_service::EventCategoryService,
    event_service::EventService, inbox_service::InboxService, intern_service::InternService,
    job_service::JobService, job_title_service::JobTitleService,
    partner_service::PartnerService, solution_service::SolutionService,
    storage_service::ImageStorage, tech_stack_tag_service::TechStackTagService,
    topic_service::TopicService, user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub storage: ImageStorage,
    pub user_service: UserService,
    pub department_type_service: DepartmentTypeService,
    pub job_title_service: JobTitleService,
    pub tech_stack_tag_service: TechStackTagService,
    pub topic_service: TopicService,
    pub event_category_service: EventCategoryService,
    pub job_service: JobService,
    pub intern_service: InternService,
    pub partner_service: PartnerService,
    pub solution_service: SolutionService,
    pub event_service: EventService,
    pub comment_service: CommentService,
    pub inbox_service: InboxService,
    pub company_profile_service: CompanyProfileService,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        let storage = ImageStorage::new(config.uploads_dir.clone(), config.max_upload_bytes);

        let user_service = UserService::new(
            pool.clone(),
            config.jwt_secret.clone(),
            config.jwt_expiry_hours,
        );
        let department_type_service = DepartmentTypeService::new(pool.clone());
        let job_title_service = JobTitleService::new(pool.clone());
        let tech_stack_tag_service = TechStackTagService::new(pool.clone());
        let topic_service = TopicService::new(pool.clone());
        let event_category_service = EventCategoryService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let intern_service = InternService::new(pool.clone());
        let partner_service = PartnerService::new(pool.clone(), storage.clone());
        let solution_service = SolutionService::new(pool.clone(), storage.clone());
        let event_service = EventService::new(pool.clone(), storage.clone());
        let comment_service = CommentService::new(pool.clone());
        let inbox_service = InboxService::new(pool.clone());
        let company_profile_service = CompanyProfileService::new(pool.clone());

        Self {
            pool,
            config: Arc::new(config),
            storage,
            user_service,
            department_type_service,
            job_title_service,
            tech_stack_tag_service,
            topic_service,
            event_category_service,
            job_service,
            intern_service,
            partner_service,
            solution_service,
            event_service,
            comment_service,
            inbox_service,
            company_profile_service,
        }
    }
}
