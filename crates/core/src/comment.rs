//! Comment form input, its validated shape, and article binding.

use serde::{Deserialize, Serialize};

use crate::types::DbId;
use crate::validation::{messages, FieldErrors};

/// Author recorded when a comment is submitted without one.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Raw comment form as submitted. `article` carries the owning article's
/// title, not its id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentForm {
    pub article: String,
    pub author: String,
    pub text: String,
}

impl CommentForm {
    /// Initial form for a new comment on the article titled `article_title`.
    pub fn initial(article_title: &str) -> Self {
        Self {
            article: article_title.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            text: String::new(),
        }
    }
}

/// A comment submission whose own fields passed validation. The article
/// title is not yet known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidComment {
    pub article_title: String,
    pub author: String,
    pub text: String,
}

/// A fully validated comment, bound to a stored article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundComment {
    pub article_id: DbId,
    pub author: String,
    pub text: String,
}

/// Finish comment validation with the result of the article title lookup.
///
/// An unresolved title is reported on `article` alongside any other field
/// errors, unless `article` already failed (e.g. it was empty).
pub fn bind_article(
    checked: Result<ValidComment, FieldErrors>,
    resolved: Option<DbId>,
) -> Result<BoundComment, FieldErrors> {
    match (checked, resolved) {
        (Ok(valid), Some(article_id)) => Ok(BoundComment {
            article_id,
            author: valid.author,
            text: valid.text,
        }),
        (Ok(_), None) => {
            let mut errors = FieldErrors::new();
            errors.add("article", messages::ARTICLE_UNRESOLVED);
            Err(errors)
        }
        (Err(mut errors), None) => {
            if !errors.contains("article") {
                errors.add("article", messages::ARTICLE_UNRESOLVED);
            }
            Err(errors)
        }
        (Err(errors), Some(_)) => Err(errors),
    }
}
