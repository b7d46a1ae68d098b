//! Repository for the `comments` table.
//!
//! Reads join `articles` so every [`Comment`] carries its article's title.

use chrono::Utc;
use gazette_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::comment::{Comment, CommentFields};

/// Column list shared across read queries to avoid repetition.
const COLUMNS: &str = "c.id, c.article_id, a.title AS article_title, c.author, c.text, \
                       c.created_at, c.updated_at";

/// Source clause shared across read queries.
const FROM: &str = "FROM comments c JOIN articles a ON a.id = c.article_id";

/// Newest first; ids break ties between identical timestamps.
const NEWEST_FIRST: &str = "ORDER BY c.created_at DESC, c.id DESC";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, stamping both timestamps with the current time.
    pub async fn create(pool: &SqlitePool, input: &CommentFields) -> Result<Comment, sqlx::Error> {
        let now = Utc::now();
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO comments (article_id, author, text, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING id",
        )
        .bind(input.article_id)
        .bind(&input.author)
        .bind(&input.text)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE c.id = ?1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} {NEWEST_FIRST}");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// List the comments of one article, newest first.
    pub async fn list_for_article(
        pool: &SqlitePool,
        article_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE c.article_id = ?1 {NEWEST_FIRST}");
        sqlx::query_as::<_, Comment>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a comment's article, author and text and refresh `updated_at`.
    /// `created_at` is never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &CommentFields,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE comments SET article_id = ?2, author = ?3, text = ?4, updated_at = ?5
             WHERE id = ?1",
        )
        .bind(id)
        .bind(input.article_id)
        .bind(&input.author)
        .bind(&input.text)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the comments attached to an article.
    pub async fn count_for_article(pool: &SqlitePool, article_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE article_id = ?1")
            .bind(article_id)
            .fetch_one(pool)
            .await
    }

    /// Count all comments.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await
    }
}
