use super::messages::*;
use super::{present, FieldErrors, FieldValidator};
use super::{
    ARTICLE_AUTHOR_MAX, ARTICLE_TEXT_MAX, ARTICLE_TITLE_MAX, COMMENT_AUTHOR_MAX, COMMENT_TEXT_MAX,
};
use crate::article::{ArticleForm, ValidArticle};
use crate::comment::{CommentForm, ValidComment, DEFAULT_AUTHOR};

/// Hand-written per-field checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inline;

/// Required text field: empty check first, then the length limit.
fn required(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    max: usize,
    empty: &str,
    too_long: &str,
) -> String {
    let Some(value) = present(raw) else {
        errors.add(field, empty);
        return String::new();
    };
    if value.chars().count() > max {
        errors.add(field, too_long);
    }
    value
}

impl FieldValidator for Inline {
    fn check_article(&self, form: &ArticleForm) -> Result<ValidArticle, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = required(
            &mut errors,
            "title",
            &form.title,
            ARTICLE_TITLE_MAX,
            TITLE_EMPTY,
            TITLE_TOO_LONG,
        );
        let author = required(
            &mut errors,
            "author",
            &form.author,
            ARTICLE_AUTHOR_MAX,
            AUTHOR_EMPTY,
            AUTHOR_TOO_LONG,
        );
        let text = required(
            &mut errors,
            "text",
            &form.text,
            ARTICLE_TEXT_MAX,
            ARTICLE_TEXT_EMPTY,
            ARTICLE_TEXT_TOO_LONG,
        );

        errors.into_result(ValidArticle {
            title,
            author,
            text,
        })
    }

    fn check_comment(&self, form: &CommentForm) -> Result<ValidComment, FieldErrors> {
        let mut errors = FieldErrors::new();

        let article_title = present(&form.article).unwrap_or_else(|| {
            errors.add("article", ARTICLE_EMPTY);
            String::new()
        });

        let author = match present(&form.author) {
            None => DEFAULT_AUTHOR.to_string(),
            Some(author) => {
                if author.chars().count() > COMMENT_AUTHOR_MAX {
                    errors.add("author", AUTHOR_TOO_LONG);
                }
                author
            }
        };

        let text = required(
            &mut errors,
            "text",
            &form.text,
            COMMENT_TEXT_MAX,
            COMMENT_TEXT_EMPTY,
            COMMENT_TEXT_TOO_LONG,
        );

        errors.into_result(ValidComment {
            article_title,
            author,
            text,
        })
    }
}
