//! Liveness and content summary for operators.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use gazette_db::repositories::{ArticleRepo, CommentRepo};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Active form validator, as set by `VALIDATION_STRATEGY`.
    pub validation: &'static str,
    /// Stored rows; absent when the store cannot be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentCounts>,
}

#[derive(Serialize)]
pub struct ContentCounts {
    pub articles: i64,
    pub comments: i64,
}

async fn content_counts(pool: &gazette_db::DbPool) -> Result<ContentCounts, sqlx::Error> {
    Ok(ContentCounts {
        articles: ArticleRepo::count(pool).await?,
        comments: CommentRepo::count(pool).await?,
    })
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let content = match content_counts(&state.pool).await {
        Ok(counts) => Some(counts),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not read the store");
            None
        }
    };
    let db_healthy = content.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        validation: state.config.validation.as_str(),
        content,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
