use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    utils::token::decode_token,
    AppState,
};

/// Claims carried by an admin bearer token. Taking `Claims` as a handler
/// argument is what marks an endpoint as admin-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub name: String,
    #[serde(rename = "FullName")]
    pub full_name: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32> {
        self.sub
            .parse()
            .map_err(|_| Error::Unauthorized("invalid_subject".to_string()))
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("missing_authorization".to_string()))?;
    let auth_str = auth_header
        .to_str()
        .map_err(|_| Error::Unauthorized("bad_authorization".to_string()))?;
    auth_str
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| Error::Unauthorized("unsupported_scheme".to_string()))
}

#[async_trait]
impl<S> FromRequestParts<S> for Claims
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        if let Some(claims) = parts.extensions.get::<Claims>() {
            return Ok(claims.clone());
        }

        let state = AppState::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        let claims = decode_token(token, &state.config.jwt_secret)?;
        claims.user_id()?;
        parts.extensions.insert(claims.clone());
        Ok(claims)
    }
}

/// Claims when the request carries an `Authorization` header, `None` for
/// anonymous visitors. A header with a bad token is still rejected.
#[derive(Debug, Clone)]
pub struct MaybeClaims(pub Option<Claims>);

impl MaybeClaims {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeClaims
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(MaybeClaims(None));
        }
        Claims::from_request_parts(parts, state)
            .await
            .map(|claims| MaybeClaims(Some(claims)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert!(bearer_token(&headers).is_err());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def");
    }

    #[test]
    fn non_numeric_subject_rejected() {
        let claims = Claims {
            sub: "admin".into(),
            name: "admin".into(),
            full_name: "Admin".into(),
            iat: 0,
            exp: 0,
        };
        assert!(claims.user_id().is_err());
    }
}
