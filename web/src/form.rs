use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};

use crate::AppError;

/// Fields of the recipe form, read from either a url-encoded or a
/// `multipart/form-data` body. A repeated field keeps its first value.
#[derive(Debug, Default)]
pub struct RecipeForm {
    components: Option<String>,
    // presence is all that matters
    reset: bool,
}

impl RecipeForm {
    pub fn components(&self) -> Result<&str, AppError> {
        self.components.as_deref().ok_or(AppError::InputMissing)
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }

    fn push(&mut self, name: &str, value: String) {
        match name {
            "components" if self.components.is_none() => self.components = Some(value),
            "reset" => self.reset = true,
            _ => {}
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("multipart/form-data"))
}

#[async_trait]
impl<S> FromRequest<S> for RecipeForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut form = RecipeForm::default();

        if is_multipart(&req) {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidForm(rejection.body_text()))?;
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::InvalidForm(e.body_text()))?
            {
                let name = field.name().unwrap_or_default().to_string();
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::InvalidForm(e.body_text()))?;
                form.push(&name, value);
            }
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::InvalidForm(rejection.body_text()))?;
            for (name, value) in pairs {
                form.push(&name, value);
            }
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http};

    async fn extract(content_type: &str, body: &'static str) -> Result<RecipeForm, AppError> {
        let req = http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();
        RecipeForm::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_urlencoded_first_value_wins() {
        let form = extract(
            "application/x-www-form-urlencoded",
            "components=egg&components=bread",
        )
        .await
        .unwrap();

        assert_eq!(form.components().unwrap(), "egg");
        assert!(!form.is_reset());
    }

    #[tokio::test]
    async fn test_multipart_fields() {
        let form = extract(
            "multipart/form-data; boundary=XyZ",
            "--XyZ\r\n\
             Content-Disposition: form-data; name=\"components\"\r\n\r\n\
             rice, dal\r\n\
             --XyZ\r\n\
             Content-Disposition: form-data; name=\"components\"\r\n\r\n\
             ignored\r\n\
             --XyZ\r\n\
             Content-Disposition: form-data; name=\"reset\"\r\n\r\n\
             \r\n\
             --XyZ--\r\n",
        )
        .await
        .unwrap();

        assert_eq!(form.components().unwrap(), "rice, dal");
        assert!(form.is_reset());
    }

    #[tokio::test]
    async fn test_missing_components() {
        let form = extract("application/x-www-form-urlencoded", "reset=")
            .await
            .unwrap();

        assert!(matches!(form.components(), Err(AppError::InputMissing)));
        assert!(form.is_reset());
    }

    #[tokio::test]
    async fn test_multipart_without_boundary() {
        let result = extract("multipart/form-data", "components=egg").await;
        assert!(matches!(result, Err(AppError::InvalidForm(_))));
    }
}
