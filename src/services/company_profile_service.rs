use sqlx::PgPool;

use crate::dto::company_profile_dto::CompanyProfilePayload;
use crate::error::{Error, Result};
use crate::models::company_profile::{CompanyProfile, COMPANY_PROFILE_ID};

#[derive(Clone)]
pub struct CompanyProfileService {
    pool: PgPool,
}

impl CompanyProfileService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<CompanyProfile> {
        sqlx::query_as::<_, CompanyProfile>(
            r#"
            SELECT id, name, address, email, phone, about, website,
                   facebook, instagram, linkedin, youtube, update_by, update_at
            FROM company_profile
            WHERE id = $1
            "#,
        )
        .bind(COMPANY_PROFILE_ID)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Company profile has not been set up".into()))
    }

    /// There is only ever row 1; a missing row is recreated.
    pub async fn update(&self, payload: CompanyProfilePayload, actor: i32) -> Result<CompanyProfile> {
        sqlx::query(
            r#"
            INSERT INTO company_profile
                (id, name, address, email, phone, about, website,
                 facebook, instagram, linkedin, youtube, update_by, update_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                about = EXCLUDED.about,
                website = EXCLUDED.website,
                facebook = EXCLUDED.facebook,
                instagram = EXCLUDED.instagram,
                linkedin = EXCLUDED.linkedin,
                youtube = EXCLUDED.youtube,
                update_by = EXCLUDED.update_by,
                update_at = EXCLUDED.update_at
            "#,
        )
        .bind(COMPANY_PROFILE_ID)
        .bind(payload.name.trim())
        .bind(&payload.address)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.about)
        .bind(&payload.website)
        .bind(&payload.facebook)
        .bind(&payload.instagram)
        .bind(&payload.linkedin)
        .bind(&payload.youtube)
        .bind(actor)
        .execute(&self.pool)
        .await?;

        self.get().await
    }
}
