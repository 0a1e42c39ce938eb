use axum::extract::{FromRequest, FromRequestParts};

use crate::error::Error;

/// `axum::Json` whose rejections render as the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct ApiQuery<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::common::SearchQuery;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::IntoResponse,
    };
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        name: String,
    }

    #[tokio::test]
    async fn json_rejection_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"other": 1}"#))
            .unwrap();
        let err = ApiJson::<Payload>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bad_query_date_is_bad_request() {
        let (mut parts, _) = Request::builder()
            .uri("/api/jobs/search?date=yesterday")
            .body(())
            .unwrap()
            .into_parts();
        let err = ApiQuery::<SearchQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));

        let (mut parts, _) = Request::builder()
            .uri("/api/jobs/search?date=2026-03-01&keyword=rust")
            .body(())
            .unwrap()
            .into_parts();
        let ApiQuery(query) = ApiQuery::<SearchQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(query.keyword.as_deref(), Some("rust"));
    }
}
