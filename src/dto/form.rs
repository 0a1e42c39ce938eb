use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::services::storage_service::ImageUpload;

/// A multipart body split into text fields and file parts.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: Vec<(String, ImageUpload)>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = MultipartForm::default();
        while let Some(field) = multipart.next_field().await.map_err(|e| {
            tracing::warn!("Failed to read multipart field: {}", e);
            Error::BadRequest(e.to_string())
        })? {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let data = field.bytes().await?;
                    // Browsers send an empty part when no file was picked.
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }
                    form.files.push((name, ImageUpload { file_name, data }));
                }
                None => {
                    let value = field.text().await?;
                    form.fields.insert(name, value);
                }
            }
        }
        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn owned(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    pub fn required(&self, name: &str) -> Result<String> {
        self.owned(name)
            .ok_or_else(|| Error::BadRequest(format!("{} is required", name)))
    }

    pub fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.text(name)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|e| Error::BadRequest(format!("Invalid {}: {}", name, e)))
            })
            .transpose()
    }

    pub fn parse_required<T>(&self, name: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parse(name)?
            .ok_or_else(|| Error::BadRequest(format!("{} is required", name)))
    }

    pub fn take_files(&mut self, name: &str) -> Vec<ImageUpload> {
        let (matching, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.files).into_iter().partition(|(n, _)| n == name);
        self.files = rest;
        matching.into_iter().map(|(_, upload)| upload).collect()
    }

    pub fn take_file(&mut self, name: &str) -> Option<ImageUpload> {
        self.take_files(name).into_iter().next()
    }

    #[cfg(test)]
    pub(crate) fn from_parts(fields: &[(&str, &str)], files: Vec<(&str, ImageUpload)>) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: files
                .into_iter()
                .map(|(k, f)| (k.to_string(), f))
                .collect(),
        }
    }
}

/// Extracting the form directly keeps multipart rejections (wrong content
/// type, missing boundary) inside the error envelope.
#[async_trait]
impl<S> FromRequest<S> for MultipartForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
        Self::read(multipart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn file(name: &str) -> ImageUpload {
        ImageUpload {
            file_name: name.to_string(),
            data: Bytes::from_static(b"x"),
        }
    }

    #[test]
    fn typed_accessors() {
        let form = MultipartForm::from_parts(
            &[("name", "  Acme "), ("department_type_id", "4"), ("blank", "  ")],
            vec![],
        );
        assert_eq!(form.text("name"), Some("Acme"));
        assert_eq!(form.text("blank"), None);
        assert_eq!(form.parse::<i32>("department_type_id").unwrap(), Some(4));
        assert_eq!(form.parse::<i32>("missing").unwrap(), None);
        assert!(form.parse::<i32>("name").is_err());
        assert!(form.required("blank").is_err());
    }

    #[tokio::test]
    async fn non_multipart_body_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{}"))
            .unwrap();
        let err = MultipartForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }

    #[test]
    fn take_files_by_field_name() {
        let mut form = MultipartForm::from_parts(
            &[],
            vec![("images", file("a.png")), ("image", file("b.png")), ("images", file("c.png"))],
        );
        let images = form.take_files("images");
        assert_eq!(images.len(), 2);
        assert_eq!(images[1].file_name, "c.png");
        assert_eq!(form.take_file("image").unwrap().file_name, "b.png");
        assert!(form.take_file("image").is_none());
    }
}
