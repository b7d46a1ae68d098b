//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, seed_article, seed_comment};
use gazette_core::validation::ValidationStrategy;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["validation"], "declarative");
    assert_eq!(json["content"]["articles"], 0);
    assert_eq!(json["content"]["comments"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_counts_stored_content(pool: SqlitePool) {
    let article = seed_article(&pool, "Counted").await;
    seed_comment(&pool, article.id, "one").await;
    seed_comment(&pool, article.id, "two").await;
    seed_article(&pool, "Also counted").await;

    let response = get(common::build_test_app(pool), "/health").await;
    let json = body_json(response).await;

    assert_eq!(json["content"]["articles"], 2);
    assert_eq!(json["content"]["comments"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_reports_active_validation_strategy(pool: SqlitePool) {
    let app = common::build_test_app_with(pool, ValidationStrategy::Inline);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["validation"], "inline");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_degrades_when_store_is_closed(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json.get("content").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    // MakeRequestUuid produces a hyphenated UUID.
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}
