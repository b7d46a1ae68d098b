//! HTTP-level integration tests for the comment pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, location, post_form, seed_article, seed_comment};
use gazette_core::comment::DEFAULT_AUTHOR;
use gazette_core::validation::{messages, ValidationStrategy};
use gazette_db::repositories::CommentRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first(pool: SqlitePool) {
    let article = seed_article(&pool, "Busy").await;
    seed_comment(&pool, article.id, "older remark").await;
    seed_comment(&pool, article.id, "newer remark").await;

    let response = get(common::build_test_app(pool), "/comments").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    let newer = html.find("newer remark").expect("newer comment listed");
    let older = html.find("older remark").expect("older comment listed");
    assert!(newer < older);
    assert!(html.contains("Busy"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_list_renders(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/comments").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No comments yet."));
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_is_prefilled_for_the_path_article(pool: SqlitePool) {
    seed_article(&pool, "Other").await;
    let article = seed_article(&pool, "Target").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/articles/{}/comments/create", article.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(&format!("value=\"{DEFAULT_AUTHOR}\"")));
    assert!(html.contains("<option value=\"Target\" selected>"));
    assert!(html.contains("<option value=\"Other\">"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_form_for_missing_article_returns_404(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/articles/77/comments/create").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_author_defaults_to_anonymous(pool: SqlitePool) {
    let article = seed_article(&pool, "Open").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/articles/{}/comments/create", article.id),
        &[("article", "Open"), ("author", ""), ("text", "Hello there")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/articles/{}", article.id));

    let comments = CommentRepo::list_for_article(&pool, article.id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author, DEFAULT_AUTHOR);
    assert_eq!(comments[0].text, "Hello there");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitted_title_decides_the_owning_article(pool: SqlitePool) {
    let from = seed_article(&pool, "From here").await;
    let to = seed_article(&pool, "Over there").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/articles/{}/comments/create", from.id),
        &[("article", "Over there"), ("author", "Eve"), ("text", "moved")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/articles/{}", to.id));

    assert_eq!(CommentRepo::count_for_article(&pool, from.id).await.unwrap(), 0);
    assert_eq!(CommentRepo::count_for_article(&pool, to.id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_article_title_is_rejected(pool: SqlitePool) {
    let article = seed_article(&pool, "Real").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/articles/{}/comments/create", article.id),
        &[("article", "Imaginary"), ("author", "Eve"), ("text", "hi")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(messages::ARTICLE_UNRESOLVED));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_title_and_empty_text_are_both_reported(pool: SqlitePool) {
    let article = seed_article(&pool, "Real").await;

    let response = post_form(
        common::build_test_app_with(pool.clone(), ValidationStrategy::Inline),
        &format!("/articles/{}/comments/create", article.id),
        &[("article", "Imaginary"), ("text", "   ")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(messages::ARTICLE_UNRESOLVED));
    assert!(html.contains(messages::COMMENT_TEXT_EMPTY));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_article_field_is_rejected(pool: SqlitePool) {
    let article = seed_article(&pool, "Real").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/articles/{}/comments/create", article.id),
        &[("article", ""), ("text", "hi")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(messages::ARTICLE_EMPTY));
    assert!(!html.contains(messages::ARTICLE_UNRESOLVED));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn overlong_comment_text_is_rejected(pool: SqlitePool) {
    let article = seed_article(&pool, "Real").await;
    let text = "x".repeat(401);

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/articles/{}/comments/create", article.id),
        &[("article", "Real"), ("text", &text)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains(messages::COMMENT_TEXT_TOO_LONG));
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_post_for_missing_path_article_returns_404(pool: SqlitePool) {
    seed_article(&pool, "Real").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/articles/999/comments/create",
        &[("article", "Real"), ("text", "hi")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(CommentRepo::list(&pool).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_form_is_prefilled(pool: SqlitePool) {
    let article = seed_article(&pool, "Host").await;
    let comment = seed_comment(&pool, article.id, "original words").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/comments/{}/update", comment.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("original words"));
    assert!(html.contains("value=\"Reader\""));
    assert!(html.contains("<option value=\"Host\" selected>"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn valid_update_persists_and_keeps_created_at(pool: SqlitePool) {
    let article = seed_article(&pool, "Host").await;
    let comment = seed_comment(&pool, article.id, "before").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/comments/{}/update", comment.id),
        &[("article", "Host"), ("author", "Editor"), ("text", "after")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/comments");

    let stored = CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.author, "Editor");
    assert_eq!(stored.text, "after");
    assert_eq!(stored.created_at, comment.created_at);
    assert!(stored.updated_at >= comment.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejected_update_leaves_comment_unchanged(pool: SqlitePool) {
    let article = seed_article(&pool, "Host").await;
    let comment = seed_comment(&pool, article.id, "keep me").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/comments/{}/update", comment.id),
        &[("article", "Nowhere"), ("author", "Editor"), ("text", "changed")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let html = body_text(response).await;
    assert!(html.contains(messages::ARTICLE_UNRESOLVED));
    assert!(html.contains(&format!("action=\"/comments/{}/update\"", comment.id)));

    let stored = CommentRepo::find_by_id(&pool, comment.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.text, "keep me");
    assert_eq!(stored.author, "Reader");
    assert_eq!(stored.article_id, article.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_comment_returns_404(pool: SqlitePool) {
    seed_article(&pool, "Host").await;
    let app = common::build_test_app(pool);

    assert_eq!(
        get(app.clone(), "/comments/31/update").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        post_form(
            app,
            "/comments/31/update",
            &[("article", "Host"), ("text", "x")],
        )
        .await
        .status(),
        StatusCode::NOT_FOUND
    );
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_confirmation_shows_the_comment(pool: SqlitePool) {
    let article = seed_article(&pool, "Host").await;
    let comment = seed_comment(&pool, article.id, "soon gone").await;

    let response = get(
        common::build_test_app(pool),
        &format!("/comments/{}/delete", comment.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("soon gone"));
    assert!(html.contains("Host"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_only_that_comment(pool: SqlitePool) {
    let article = seed_article(&pool, "Host").await;
    let doomed = seed_comment(&pool, article.id, "bye").await;
    let kept = seed_comment(&pool, article.id, "stay").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        &format!("/comments/{}/delete", doomed.id),
        &[],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/comments");

    let remaining = CommentRepo::list(&pool).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_of_missing_comment_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    assert_eq!(
        get(app.clone(), "/comments/8/delete").await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        post_form(app, "/comments/8/delete", &[]).await.status(),
        StatusCode::NOT_FOUND
    );
}
