//! Handlers for articles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use gazette_core::article::{require_unique_title, ArticleForm, ValidArticle};
use gazette_core::error::CoreError;
use gazette_core::types::DbId;
use gazette_core::validation::FieldErrors;
use gazette_db::models::article::Article;
use gazette_db::repositories::{ArticleRepo, CommentRepo};

use super::render;
use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::{
    ArticleCreatePage, ArticleDeletePage, ArticleDetailPage, ArticleListPage, ArticleUpdatePage,
};

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch an article by id or return 404.
pub(crate) async fn ensure_article(pool: &gazette_db::DbPool, id: DbId) -> AppResult<Article> {
    ArticleRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))
}

/// Run the configured field rules, then the title-uniqueness rule.
///
/// `current` is the article being edited, whose own title does not count as
/// taken.
async fn check_article(
    state: &AppState,
    form: &ArticleForm,
    current: Option<DbId>,
) -> AppResult<Result<ValidArticle, FieldErrors>> {
    let checked = state.validator.check_article(form);
    let holder = ArticleRepo::find_by_title(&state.pool, form.title.trim())
        .await?
        .map(|a| a.id);
    Ok(require_unique_title(checked, holder, current))
}

fn detail_url(id: DbId) -> String {
    format!("/articles/{id}")
}

/* --------------------------------------------------------------------------
Read
-------------------------------------------------------------------------- */

/// GET /
pub async fn list(State(state): State<AppState>) -> AppResult<Response> {
    let articles = ArticleRepo::list(&state.pool).await?;
    render(&state, StatusCode::OK, &ArticleListPage { articles })
}

/// GET /articles/{id}
pub async fn detail(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let article = ensure_article(&state.pool, id).await?;
    let comments = CommentRepo::list_for_article(&state.pool, id).await?;
    render(
        &state,
        StatusCode::OK,
        &ArticleDetailPage { article, comments },
    )
}

/* --------------------------------------------------------------------------
Create
-------------------------------------------------------------------------- */

/// GET /articles/create
pub async fn create_form(State(state): State<AppState>) -> AppResult<Response> {
    render(
        &state,
        StatusCode::OK,
        &ArticleCreatePage {
            form: ArticleForm::default(),
            errors: FieldErrors::new(),
        },
    )
}

/// POST /articles/create
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ArticleForm>,
) -> AppResult<Response> {
    match check_article(&state, &form, None).await? {
        Ok(valid) => {
            let article = ArticleRepo::create(&state.pool, &valid.into()).await?;
            tracing::info!(article_id = article.id, title = %article.title, "Article created");
            Ok(Redirect::to(&detail_url(article.id)).into_response())
        }
        Err(errors) => {
            tracing::debug!(%errors, "Article create rejected");
            render(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &ArticleCreatePage { form, errors },
            )
        }
    }
}

/* --------------------------------------------------------------------------
Update
-------------------------------------------------------------------------- */

/// GET /articles/{id}/update
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let article = ensure_article(&state.pool, id).await?;
    let form = article.to_form();
    render(
        &state,
        StatusCode::OK,
        &ArticleUpdatePage {
            article,
            form,
            errors: FieldErrors::new(),
        },
    )
}

/// POST /articles/{id}/update
///
/// Validates the submitted values, not the stored ones. On rejection the
/// stored article is left untouched and shown alongside the submission.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<ArticleForm>,
) -> AppResult<Response> {
    let article = ensure_article(&state.pool, id).await?;

    match check_article(&state, &form, Some(id)).await? {
        Ok(valid) => {
            let updated = ArticleRepo::update(&state.pool, id, &valid.into())
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Article",
                    id,
                }))?;
            tracing::info!(article_id = updated.id, title = %updated.title, "Article updated");
            Ok(Redirect::to(&detail_url(updated.id)).into_response())
        }
        Err(errors) => {
            tracing::debug!(article_id = id, %errors, "Article update rejected");
            render(
                &state,
                StatusCode::UNPROCESSABLE_ENTITY,
                &ArticleUpdatePage {
                    article,
                    form,
                    errors,
                },
            )
        }
    }
}

/* --------------------------------------------------------------------------
Delete
-------------------------------------------------------------------------- */

/// GET /articles/{id}/delete
pub async fn delete_confirm(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let article = ensure_article(&state.pool, id).await?;
    let comment_count = CommentRepo::count_for_article(&state.pool, id).await?;
    render(
        &state,
        StatusCode::OK,
        &ArticleDeletePage {
            article,
            comment_count,
        },
    )
}

/// POST /articles/{id}/delete
///
/// Comments of the article are removed with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let deleted = ArticleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }));
    }

    tracing::info!(article_id = id, "Article deleted");
    Ok(Redirect::to("/").into_response())
}
