use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;

pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub fn issue_token(
    user_id: i32,
    username: &str,
    full_name: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<IssuedToken> {
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::hours(ttl_hours.max(1));
    let claims = Claims {
        sub: user_id.to_string(),
        name: username.to_string(),
        full_name: full_name.to_string(),
        iat: issued_at.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(IssuedToken { token, expires_at })
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| Error::Unauthorized("invalid_token".to_string()))?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let issued = issue_token(7, "admin", "Site Admin", "secret", 24).unwrap();
        let claims = decode_token(&issued.token, "secret").unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.name, "admin");
        assert_eq!(claims.full_name, "Site Admin");
        assert_eq!(claims.user_id().unwrap(), 7);
        assert!(issued.expires_at > Utc::now() + Duration::hours(23));
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let issued = issue_token(1, "admin", "Admin", "secret", 24).unwrap();
        let err = decode_token(&issued.token, "other").unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let claims = Claims {
            sub: "1".into(),
            name: "admin".into(),
            full_name: "Admin".into(),
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        assert!(decode_token(&token, "secret").is_err());
    }
}
