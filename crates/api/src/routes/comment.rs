//! Route definitions for comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Comment routes. Creation is nested under the article it starts from.
///
/// ```text
/// GET        /comments                        list
/// GET, POST  /articles/{id}/comments/create   create_form, create
/// GET, POST  /comments/{id}/update            update_form, update
/// GET, POST  /comments/{id}/delete            delete_confirm, delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(comment::list))
        .route(
            "/articles/{id}/comments/create",
            get(comment::create_form).post(comment::create),
        )
        .route(
            "/comments/{id}/update",
            get(comment::update_form).post(comment::update),
        )
        .route(
            "/comments/{id}/delete",
            get(comment::delete_confirm).post(comment::delete),
        )
}
