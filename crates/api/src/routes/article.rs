//! Route definitions for articles.

use axum::routing::get;
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Article routes.
///
/// ```text
/// GET        /                        list
/// GET, POST  /articles/create         create_form, create
/// GET        /articles/{id}           detail
/// GET, POST  /articles/{id}/update    update_form, update
/// GET, POST  /articles/{id}/delete    delete_confirm, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::list))
        .route(
            "/articles/create",
            get(article::create_form).post(article::create),
        )
        .route("/articles/{id}", get(article::detail))
        .route(
            "/articles/{id}/update",
            get(article::update_form).post(article::update),
        )
        .route(
            "/articles/{id}/delete",
            get(article::delete_confirm).post(article::delete),
        )
}
