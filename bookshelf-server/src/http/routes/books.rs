//! Book endpoints
//!
//! GET routes render a view; POST routes run one repository call and
//! redirect to `/books` with 302 Found. Storage failures become a 500 page,
//! never a redirect.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::db::BookRepo;
use crate::http::error::WebError;
use crate::http::extractors::{BookFormBody, BookId};
use crate::http::server::AppState;
use crate::models::BookForm;
use crate::views;

/// 302 to the list page
fn to_books() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/books")]).into_response()
}

/// GET /books - all books ordered by title
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Html<String>, WebError> {
    let books = BookRepo::new(&state.db).list_all().await?;
    Ok(views::books(&books))
}

/// GET /edit/{id} - pre-filled edit form
async fn edit_form(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Html<String>, WebError> {
    let book = BookRepo::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| WebError::book_not_found(id))?;

    Ok(views::edit_form(&book))
}

/// POST /edit/{id} - overwrite a book
async fn update_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
    BookFormBody(form): BookFormBody,
) -> Result<Response, WebError> {
    let affected = BookRepo::new(&state.db).update_by_id(id, &form).await?;
    if affected == 0 {
        tracing::warn!(id, "update matched no book");
    }

    Ok(to_books())
}

/// GET /create - blank form
async fn create_form() -> Html<String> {
    views::create_form(&BookForm::default())
}

/// POST /create - insert a book
async fn create_book(
    State(state): State<Arc<AppState>>,
    BookFormBody(form): BookFormBody,
) -> Result<Response, WebError> {
    let id = BookRepo::new(&state.db).create(&form).await?;
    tracing::info!(id, "book created");

    Ok(to_books())
}

/// GET /delete/{id} - confirmation page
async fn delete_confirm(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Html<String>, WebError> {
    let book = BookRepo::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| WebError::book_not_found(id))?;

    Ok(views::delete_confirm(&book))
}

/// POST /delete/{id} - delete a book
async fn delete_book(
    State(state): State<Arc<AppState>>,
    BookId(id): BookId,
) -> Result<Response, WebError> {
    let affected = BookRepo::new(&state.db).delete_by_id(id).await?;
    if affected == 0 {
        tracing::warn!(id, "delete matched no book");
    }

    Ok(to_books())
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(list_books))
        .route("/edit/{id}", get(edit_form).post(update_book))
        .route("/create", get(create_form).post(create_book))
        .route("/delete/{id}", get(delete_confirm).post(delete_book))
}
