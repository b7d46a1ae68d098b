//! Comment entity model and DTOs.

use gazette_core::comment::{BoundComment, CommentForm};
use gazette_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment row joined with its owning article's title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub article_id: DbId,
    pub article_title: String,
    pub author: String,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Comment {
    /// The stored values as a form, for pre-filling edit pages.
    pub fn to_form(&self) -> CommentForm {
        CommentForm {
            article: self.article_title.clone(),
            author: self.author.clone(),
            text: self.text.clone(),
        }
    }
}

/// DTO for inserting or replacing a comment. Every field is written.
#[derive(Debug, Clone)]
pub struct CommentFields {
    pub article_id: DbId,
    pub author: String,
    pub text: String,
}

impl From<BoundComment> for CommentFields {
    fn from(bound: BoundComment) -> Self {
        Self {
            article_id: bound.article_id,
            author: bound.author,
            text: bound.text,
        }
    }
}
