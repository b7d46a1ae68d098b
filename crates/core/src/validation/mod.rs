//! Form validation for articles and comments.
//!
//! Two interchangeable strategies implement [`FieldValidator`]:
//!
//! - [`Declarative`] describes each field's rules as `validator` derive
//!   attributes and collects the resulting messages.
//! - [`Inline`] performs the same checks imperatively, field by field.
//!
//! Both evaluate every field independently and report at most one message per
//! field (the first rule that fails). Identical input yields identical output
//! regardless of which strategy is selected.

mod declarative;
mod inline;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::article::{ArticleForm, ValidArticle};
use crate::comment::{CommentForm, ValidComment};

pub use declarative::Declarative;
pub use inline::Inline;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const ARTICLE_TITLE_MAX: usize = 200;
pub const ARTICLE_AUTHOR_MAX: usize = 40;
pub const ARTICLE_TEXT_MAX: usize = 3000;
pub const COMMENT_AUTHOR_MAX: usize = 40;
pub const COMMENT_TEXT_MAX: usize = 400;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub mod messages {
    pub const TITLE_EMPTY: &str = "Title should not be empty!";
    pub const TITLE_TOO_LONG: &str = "Title should be 200 symbols or less!";
    pub const TITLE_TAKEN: &str = "Article with this title already exists!";
    pub const AUTHOR_EMPTY: &str = "Author should not be empty!";
    pub const AUTHOR_TOO_LONG: &str = "Author should be 40 symbols or less!";
    pub const ARTICLE_TEXT_EMPTY: &str = "Text should not be empty!";
    pub const ARTICLE_TEXT_TOO_LONG: &str = "Text should be 3000 symbols or less!";
    pub const ARTICLE_EMPTY: &str = "Article should not be empty!";
    pub const ARTICLE_UNRESOLVED: &str = "Article with this title does not exist!";
    pub const COMMENT_TEXT_EMPTY: &str = "Text should not be empty!";
    pub const COMMENT_TEXT_TOO_LONG: &str = "Text should be 400 symbols or less!";
}

// ---------------------------------------------------------------------------
// FieldErrors
// ---------------------------------------------------------------------------

/// Field name to human-readable message, one entry per failing field.
///
/// Serializes as a plain map so templates can look up `errors.title`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already failed.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when nothing failed, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Strategy interface
// ---------------------------------------------------------------------------

/// A validation strategy for submitted article and comment forms.
///
/// Implementations trim surrounding whitespace, treat whitespace-only values
/// as empty, and count lengths in characters.
pub trait FieldValidator: Send + Sync {
    fn check_article(&self, form: &ArticleForm) -> Result<ValidArticle, FieldErrors>;

    /// Check the comment's own fields. Resolving `article` to a stored row is
    /// finished by [`crate::comment::bind_article`] once the lookup has run.
    fn check_comment(&self, form: &CommentForm) -> Result<ValidComment, FieldErrors>;
}

/// Which [`FieldValidator`] the server uses, chosen from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationStrategy {
    #[default]
    Declarative,
    Inline,
}

impl ValidationStrategy {
    pub fn validator(self) -> &'static dyn FieldValidator {
        match self {
            ValidationStrategy::Declarative => &Declarative,
            ValidationStrategy::Inline => &Inline,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStrategy::Declarative => "declarative",
            ValidationStrategy::Inline => "inline",
        }
    }
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "declarative" => Ok(ValidationStrategy::Declarative),
            "inline" => Ok(ValidationStrategy::Inline),
            other => Err(format!(
                "Unknown validation strategy '{other}'. Valid strategies: declarative, inline"
            )),
        }
    }
}

/// Trimmed value, or `None` when nothing but whitespace was submitted.
pub(crate) fn present(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
