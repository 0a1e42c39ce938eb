use sqlx::PgPool;

use crate::dto::user_dto::{
    ChangePasswordPayload, CreateUserPayload, LoginRequest, LoginResponse, UpdateUserPayload,
    UserResponse,
};
use crate::error::{Error, Result};
use crate::models::admin_user::AdminUser;
use crate::utils::crypto::{hash_password, verify_password};
use crate::utils::token::issue_token;

const SELECT_USER: &str = r#"
    SELECT id, username, full_name, email, password_hash, deleteflag,
           created_by, update_by, created_at, update_at
    FROM admin_users
"#;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
    jwt_secret: String,
    jwt_expiry_hours: i64,
}

impl UserService {
    pub fn new(pool: PgPool, jwt_secret: String, jwt_expiry_hours: i64) -> Self {
        Self {
            pool,
            jwt_secret,
            jwt_expiry_hours,
        }
    }

    fn not_found(id: i32) -> Error {
        Error::NotFound(format!("User {} not found", id))
    }

    async fn find_active(&self, id: i32) -> Result<AdminUser> {
        sqlx::query_as::<_, AdminUser>(&format!("{} WHERE id = $1 AND NOT deleteflag", SELECT_USER))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Soft-deleted users cannot log in; both failure modes share one message.
    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse> {
        let user = sqlx::query_as::<_, AdminUser>(&format!(
            "{} WHERE LOWER(username) = LOWER($1) AND NOT deleteflag",
            SELECT_USER
        ))
        .bind(req.username.trim())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized(INVALID_CREDENTIALS.into()))?;

        if !verify_password(&req.password, &user.password_hash)? {
            tracing::warn!(username = %user.username, "rejected login attempt");
            return Err(Error::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let issued = issue_token(
            user.id,
            &user.username,
            &user.full_name,
            &self.jwt_secret,
            self.jwt_expiry_hours,
        )?;
        tracing::info!(user_id = user.id, "admin logged in");

        Ok(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user: user.into(),
        })
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>> {
        let users = sqlx::query_as::<_, AdminUser>(&format!(
            "{} WHERE NOT deleteflag ORDER BY id DESC",
            SELECT_USER
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserResponse> {
        Ok(self.find_active(id).await?.into())
    }

    pub async fn create(&self, payload: CreateUserPayload, actor: Option<i32>) -> Result<UserResponse> {
        let password_hash = hash_password(&payload.password)?;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO admin_users (username, full_name, email, password_hash, created_by, update_by)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id
            "#,
        )
        .bind(payload.username.trim())
        .bind(payload.full_name.trim())
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(actor)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(user_id = id, created_by = ?actor, "admin user created");
        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, payload: UpdateUserPayload, actor: i32) -> Result<UserResponse> {
        let res = sqlx::query(
            r#"
            UPDATE admin_users
            SET full_name = $2, email = $3, update_by = $4, update_at = NOW()
            WHERE id = $1 AND NOT deleteflag
            "#,
        )
        .bind(id)
        .bind(payload.full_name.trim())
        .bind(&payload.email)
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        self.get_by_id(id).await
    }

    pub async fn change_password(&self, user_id: i32, payload: ChangePasswordPayload) -> Result<()> {
        let user = self.find_active(user_id).await?;
        if !verify_password(&payload.current_password, &user.password_hash)? {
            return Err(Error::BadRequest("Current password is incorrect".into()));
        }

        let password_hash = hash_password(&payload.new_password)?;
        sqlx::query(
            r#"
            UPDATE admin_users
            SET password_hash = $2, update_by = $1, update_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(&password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn soft_delete(&self, id: i32, actor: i32) -> Result<()> {
        if id == actor {
            return Err(Error::BadRequest("You cannot delete your own account".into()));
        }
        let res = sqlx::query(
            r#"
            UPDATE admin_users
            SET deleteflag = TRUE, update_by = $2, update_at = NOW()
            WHERE id = $1 AND NOT deleteflag
            "#,
        )
        .bind(id)
        .bind(actor)
        .execute(&self.pool)
        .await?;
        if res.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    /// Creates the first admin from configuration when no active admin exists.
    pub async fn ensure_seed_admin(&self, username: &str, password: &str) -> Result<()> {
        let active: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM admin_users WHERE NOT deleteflag")
                .fetch_one(&self.pool)
                .await?;
        if active > 0 {
            return Ok(());
        }

        let payload = CreateUserPayload {
            username: username.to_string(),
            full_name: "Administrator".to_string(),
            email: None,
            password: password.to_string(),
        };
        self.create(payload, None).await?;
        tracing::info!(username, "seeded initial admin user");
        Ok(())
    }
}
