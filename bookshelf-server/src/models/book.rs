//! Book record and its form payload

use serde::Deserialize;
use sqlx::FromRow;

/// A row of the `Books` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Book {
    #[sqlx(rename = "book_id")]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub comments: Option<String>,
}

/// Urlencoded body of the create and edit forms.
///
/// Every field is optional at the HTTP layer. A missing title or author is
/// sent to storage as NULL and rejected there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub comments: Option<String>,
}

impl BookForm {
    pub fn new(title: &str, author: &str, comments: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            author: Some(author.to_owned()),
            comments: Some(comments.to_owned()),
        }
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            comments: book.comments.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::{Form, FromRequest};
    use axum::http::{header, Request};

    #[test]
    fn form_from_book_keeps_absent_comments() {
        let book = Book {
            id: 3,
            title: "L'ingénue libertine".into(),
            author: "Colette".into(),
            comments: None,
        };
        let form = BookForm::from(&book);
        assert_eq!(form.title.as_deref(), Some("L'ingénue libertine"));
        assert_eq!(form.comments, None);
    }

    #[tokio::test]
    async fn urlencoded_missing_fields_are_none() {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("title=Foo&comments="))
            .unwrap();

        let Form(form) = Form::<BookForm>::from_request(request, &()).await.unwrap();
        assert_eq!(form.title.as_deref(), Some("Foo"));
        assert!(form.author.is_none());
        assert_eq!(form.comments.as_deref(), Some(""));
    }
}
