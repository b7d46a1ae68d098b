//! Request handlers for articles and comments.
//!
//! Each submodule provides the GET and POST handlers for one entity. A GET
//! renders a page; a POST validates the submitted form and either commits one
//! write and redirects, or re-renders the form with field errors.

pub mod article;
pub mod comment;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::Page;

/// Render `page` with the given status as an HTML response.
pub(crate) fn render<P: Page>(state: &AppState, status: StatusCode, page: &P) -> AppResult<Response> {
    let body = state.views.render(page)?;
    Ok((status, Html(body)).into_response())
}
