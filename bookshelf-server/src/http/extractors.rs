//! Custom Axum extractors

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::WebError;
use crate::models::BookForm;

/// Book id taken from the `{id}` path segment
pub struct BookId(pub i32);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| WebError::BadRequest {
                message: "missing book id".into(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| WebError::BadRequest {
            message: format!("invalid book id '{}'", raw),
        })?;

        Ok(Self(id))
    }
}

/// Urlencoded book form; rejections render as HTML error pages
pub struct BookFormBody(pub BookForm);

impl<S> FromRequest<S> for BookFormBody
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<BookForm>::from_request(req, state).await?;
        Ok(Self(form))
    }
}
