use validator::{Validate, ValidationErrors};

use super::{present, FieldErrors, FieldValidator};
use crate::article::{ArticleForm, ValidArticle};
use crate::comment::{CommentForm, ValidComment, DEFAULT_AUTHOR};

/// Rules expressed as `validator` derive attributes.
///
/// Blank values are mapped to `None` before validation so `required` carries
/// the "empty" message and `length` only ever sees present values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Declarative;

#[derive(Debug, Validate)]
struct ArticleRules {
    #[validate(
        required(message = "Title should not be empty!"),
        length(max = 200, message = "Title should be 200 symbols or less!")
    )]
    title: Option<String>,

    #[validate(
        required(message = "Author should not be empty!"),
        length(max = 40, message = "Author should be 40 symbols or less!")
    )]
    author: Option<String>,

    #[validate(
        required(message = "Text should not be empty!"),
        length(max = 3000, message = "Text should be 3000 symbols or less!")
    )]
    text: Option<String>,
}

#[derive(Debug, Validate)]
struct CommentRules {
    #[validate(required(message = "Article should not be empty!"))]
    article: Option<String>,

    #[validate(length(max = 40, message = "Author should be 40 symbols or less!"))]
    author: Option<String>,

    #[validate(
        required(message = "Text should not be empty!"),
        length(max = 400, message = "Text should be 400 symbols or less!")
    )]
    text: Option<String>,
}

/// Flatten `validator`'s per-field error lists into one message per field.
fn collect(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, list) in errors.field_errors() {
        if let Some(first) = list.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            out.add(field.to_string(), message);
        }
    }
    out
}

impl FieldValidator for Declarative {
    fn check_article(&self, form: &ArticleForm) -> Result<ValidArticle, FieldErrors> {
        let rules = ArticleRules {
            title: present(&form.title),
            author: present(&form.author),
            text: present(&form.text),
        };
        rules.validate().map_err(|e| collect(&e))?;

        Ok(ValidArticle {
            title: rules.title.unwrap_or_default(),
            author: rules.author.unwrap_or_default(),
            text: rules.text.unwrap_or_default(),
        })
    }

    fn check_comment(&self, form: &CommentForm) -> Result<ValidComment, FieldErrors> {
        let rules = CommentRules {
            article: present(&form.article),
            author: present(&form.author),
            text: present(&form.text),
        };
        rules.validate().map_err(|e| collect(&e))?;

        Ok(ValidComment {
            article_title: rules.article.unwrap_or_default(),
            author: rules.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            text: rules.text.unwrap_or_default(),
        })
    }
}
