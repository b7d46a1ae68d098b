pub mod article;
pub mod comment;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                   article list
/// /articles/create                    article create (GET, POST)
/// /articles/{id}                      article detail
/// /articles/{id}/update               article update (GET, POST)
/// /articles/{id}/delete               article delete (GET, POST)
/// /articles/{id}/comments/create      comment create (GET, POST)
///
/// /comments                           comment list, newest first
/// /comments/{id}/update               comment update (GET, POST)
/// /comments/{id}/delete               comment delete (GET, POST)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .merge(article::router())
        .merge(comment::router())
}
