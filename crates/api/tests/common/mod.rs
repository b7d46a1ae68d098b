#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use gazette_api::app::build_app;
use gazette_api::config::ServerConfig;
use gazette_api::state::AppState;
use gazette_api::views::Views;
use gazette_core::validation::ValidationStrategy;
use gazette_db::models::article::{Article, ArticleFields};
use gazette_db::models::comment::{Comment, CommentFields};
use gazette_db::repositories::{ArticleRepo, CommentRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(validation: ValidationStrategy) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        request_timeout_secs: 30,
        validation,
    }
}

/// Build the full application router over `pool` with the default
/// (declarative) validation strategy.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with(pool, ValidationStrategy::Declarative)
}

pub fn build_test_app_with(pool: SqlitePool, validation: ValidationStrategy) -> Router {
    let views = Views::new().expect("templates should parse");
    build_app(AppState::new(pool, test_config(validation), views))
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST a urlencoded form body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect.
pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn seed_article(pool: &SqlitePool, title: &str) -> Article {
    let input = ArticleFields {
        title: title.to_string(),
        author: "Bob".to_string(),
        text: format!("Text of {title}"),
    };
    ArticleRepo::create(pool, &input).await.unwrap()
}

pub async fn seed_comment(pool: &SqlitePool, article_id: i64, text: &str) -> Comment {
    let input = CommentFields {
        article_id,
        author: "Reader".to_string(),
        text: text.to_string(),
    };
    CommentRepo::create(pool, &input).await.unwrap()
}
