//! Repository for the `articles` table.

use gazette_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::article::{Article, ArticleFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, text";

/// Provides CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ArticleFields) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, author, text)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.text)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the article with exactly this title. Titles are unique.
    pub async fn find_by_title(
        pool: &SqlitePool,
        title: &str,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE title = ?1");
        sqlx::query_as::<_, Article>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List all articles in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY id");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Replace all three fields of an article.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ArticleFields,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET title = ?2, author = ?3, text = ?4
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.text)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article by ID; its comments are removed by the foreign key
    /// cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all articles.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(pool)
            .await
    }
}
