//! Static pages: home, about, data demo, and the 404 fallback

use axum::{http::StatusCode, response::Html, routing::get, Router};

use crate::views::{self, DataModel};

/// GET /
async fn index() -> Html<String> {
    views::index()
}

/// GET /about
async fn about() -> Html<String> {
    views::about()
}

/// GET /data
async fn data() -> Html<String> {
    views::data(&DataModel::default())
}

/// Any unmatched path
pub async fn fallback() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, views::not_found("page not found"))
}

/// Page routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/data", get(data))
}
