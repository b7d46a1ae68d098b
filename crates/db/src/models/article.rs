//! Article entity model and DTOs.

use gazette_core::article::{ArticleForm, ValidArticle};
use gazette_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// An article row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub text: String,
}

impl Article {
    /// The stored values as a form, for pre-filling edit pages.
    pub fn to_form(&self) -> ArticleForm {
        ArticleForm {
            title: self.title.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
        }
    }
}

/// DTO for inserting or replacing an article. Every field is written.
#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: String,
    pub author: String,
    pub text: String,
}

impl From<ValidArticle> for ArticleFields {
    fn from(valid: ValidArticle) -> Self {
        Self {
            title: valid.title,
            author: valid.author,
            text: valid.text,
        }
    }
}
