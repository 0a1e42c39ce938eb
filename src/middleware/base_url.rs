use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::HOST, request::Parts},
};
use std::convert::Infallible;

const FORWARDED_PROTO: &str = "x-forwarded-proto";
const FORWARDED_HOST: &str = "x-forwarded-host";

/// `scheme://host` of the current request, used to turn stored upload paths
/// into absolute URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBaseUrl(pub String);

impl RequestBaseUrl {
    pub fn url_for(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.0.trim_end_matches('/'),
            relative.trim_start_matches("./").trim_start_matches('/')
        )
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestBaseUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let scheme = header(parts, FORWARDED_PROTO)
            .map(str::to_string)
            .or_else(|| parts.uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| "http".to_string());
        let host = header(parts, FORWARDED_HOST)
            .or_else(|| header(parts, HOST.as_str()))
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()))
            .unwrap_or_else(|| "localhost".to_string());
        Ok(RequestBaseUrl(format!("{}://{}", scheme, host)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> RequestBaseUrl {
        let (mut parts, _) = req.into_parts();
        RequestBaseUrl::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn uses_host_header() {
        let req = Request::builder()
            .uri("/api/partners")
            .header("host", "cms.example.com")
            .body(())
            .unwrap();
        assert_eq!(extract(req).await.0, "http://cms.example.com");
    }

    #[tokio::test]
    async fn honours_forwarded_headers() {
        let req = Request::builder()
            .uri("/api/partners")
            .header("host", "10.0.0.5:8080")
            .header("x-forwarded-proto", "https")
            .header("x-forwarded-host", "www.example.com")
            .body(())
            .unwrap();
        let base = extract(req).await;
        assert_eq!(base.0, "https://www.example.com");
        assert_eq!(
            base.url_for("uploads/partners/a.png"),
            "https://www.example.com/uploads/partners/a.png"
        );
    }
}
