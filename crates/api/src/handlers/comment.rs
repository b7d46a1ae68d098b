//! Handlers for comments.
//!
//! The comment form names its article by title; the title is resolved to a
//! stored article during validation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use gazette_core::comment::{bind_article, BoundComment, CommentForm};
use gazette_core::error::CoreError;
use gazette_core::types::DbId;
use gazette_core::validation::FieldErrors;
use gazette_db::models::comment::Comment;
use gazette_db::repositories::{ArticleRepo, CommentRepo};

use super::article::ensure_article;
use super::render;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{CommentCreatePage, CommentDeletePage, CommentListPage, CommentUpdatePage};

const LIST_URL: &str = "/comments";

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a comment by id or return 404.
async fn ensure_comment(pool: &gazette_db::DbPool, id: DbId) -> AppResult<Comment> {
    CommentRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))
}

/// Run the configured field rules, then resolve the article title.
async fn check_comment(
    state: &AppState,
    form: &CommentForm,
) -> AppResult<Result<BoundComment, FieldErrors>> {
    let checked = state.validator.check_comment(form);
    let resolved = ArticleRepo::find_by_title(&state.pool, form.article.trim())
        .await?
        .map(|a| a.id);
    Ok(bind_article(checked, resolved))
}

/* --------------------------------------------------------------------------
Read
-------------------------------------------------------------------------- */

/// GET /comments
///
/// Newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let comments = CommentRepo::list(&state.pool).await?;
    render(&state, StatusCode::OK, &CommentListPage { comments })
}

/* --------------------------------------------------------------------------
Create
-------------------------------------------------------------------------- */

/// GET /articles/{id}/comments/create
pub async fn create_form(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<Response> {
    let article = ensure_article(&state.pool, article_id).await?;
    let articles = ArticleRepo::list(&state.pool).await?;
    let form = CommentForm::initial(&article.title);
    render(
        &state,
        StatusCode::OK,
        &CommentCreatePage {
            article,
            form,
            errors: FieldErrors::new(),
            articles,
        },
    )
}

/// POST /articles/{id}/comments/create
///
/// The submitted `article` title decides ownership; on success the response
/// redirects to that article's page.
pub async fn create(
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
    Form(form): Form<CommentForm>,
) -> AppResult<Response> {
    let article = ensure_article(&state.pool, article_id).await?;

    match check_comment(&state, &form).await? {
        Ok(bound) => {
            let comment = CommentRepo::create(&state.pool, &bound.into()).await?;
            tracing::info!(
                comment_id = comment.id,
                article_id = comment.article_id,
                "Comment created"
            );
            Ok(Redirect::to(&format!("/articles/{}", comment.article_id)).into_response())
        }
        Err(errors) => {
            tracing::debug!(article_id, %errors, "Comment create rejected");
            let articles = ArticleRepo::list(&state.pool).await?;
            render(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &CommentCreatePage {
                    article,
                    form,
                    errors,
                    articles,
                },
            )
        }
    }
}

/* --------------------------------------------------------------------------
Update
-------------------------------------------------------------------------- */

/// GET /comments/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let comment = ensure_comment(&state.pool, id).await?;
    let articles = ArticleRepo::list(&state.pool).await?;
    let form = comment.to_form();
    render(
        &state,
        StatusCode::OK,
        &CommentUpdatePage {
            comment,
            form,
            errors: FieldErrors::new(),
            articles,
        },
    )
}

/// POST /comments/{id}/update
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<CommentForm>,
) -> AppResult<Response> {
    let comment = ensure_comment(&state.pool, id).await?;

    match check_comment(&state, &form).await? {
        Ok(bound) => {
            let updated = CommentRepo::update(&state.pool, id, &bound.into())
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Comment",
                    id,
                }))?;
            tracing::info!(
                comment_id = updated.id,
                article_id = updated.article_id,
                "Comment updated"
            );
            Ok(Redirect::to(LIST_URL).into_response())
        }
        Err(errors) => {
            tracing::debug!(comment_id = id, %errors, "Comment update rejected");
            let articles = ArticleRepo::list(&state.pool).await?;
            render(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &CommentUpdatePage {
                    comment,
                    form,
                    errors,
                    articles,
                },
            )
        }
    }
}

/* --------------------------------------------------------------------------
Delete
-------------------------------------------------------------------------- */

/// GET /comments/{id}/delete
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let comment = ensure_comment(&state.pool, id).await?;
    render(&state, StatusCode::OK, &CommentDeletePage { comment })
}

/// POST /comments/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    tracing::info!(comment_id = id, "Comment deleted");
    Ok(Redirect::to(LIST_URL).into_response())
}
