//! Article form input and its validated shape.

use serde::{Deserialize, Serialize};

use crate::types::DbId;
use crate::validation::{messages, FieldErrors};

/// Raw article form as submitted. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    pub title: String,
    pub author: String,
    pub text: String,
}

/// An article submission that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArticle {
    pub title: String,
    pub author: String,
    pub text: String,
}

/// Finish article validation with the title-uniqueness rule.
///
/// `holder` is the id of the stored article already using the submitted
/// title, if any; `current` is the article being edited (`None` on create).
/// Only applied when the title passed its own rules.
pub fn require_unique_title(
    checked: Result<ValidArticle, FieldErrors>,
    holder: Option<DbId>,
    current: Option<DbId>,
) -> Result<ValidArticle, FieldErrors> {
    let taken = holder.is_some() && holder != current;
    match checked {
        Ok(_) if taken => {
            let mut errors = FieldErrors::new();
            errors.add("title", messages::TITLE_TAKEN);
            Err(errors)
        }
        Err(mut errors) if taken && !errors.contains("title") => {
            errors.add("title", messages::TITLE_TAKEN);
            Err(errors)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ValidArticle {
        ValidArticle {
            title: "Hello".into(),
            author: "Bob".into(),
            text: "Body".into(),
        }
    }

    #[test]
    fn free_title_passes() {
        assert_eq!(require_unique_title(Ok(valid()), None, None), Ok(valid()));
    }

    #[test]
    fn own_title_passes_on_update() {
        assert_eq!(
            require_unique_title(Ok(valid()), Some(3), Some(3)),
            Ok(valid())
        );
    }

    #[test]
    fn title_held_by_another_article_fails() {
        let errors = require_unique_title(Ok(valid()), Some(3), Some(4)).unwrap_err();
        assert_eq!(errors.get("title"), Some(messages::TITLE_TAKEN));

        let errors = require_unique_title(Ok(valid()), Some(3), None).unwrap_err();
        assert_eq!(errors.get("title"), Some(messages::TITLE_TAKEN));
    }

    #[test]
    fn taken_title_joins_other_field_errors() {
        let mut errors = FieldErrors::new();
        errors.add("text", messages::ARTICLE_TEXT_EMPTY);

        let errors = require_unique_title(Err(errors), Some(1), None).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some(messages::TITLE_TAKEN));
    }

    #[test]
    fn title_rule_error_is_not_replaced() {
        let mut errors = FieldErrors::new();
        errors.add("title", messages::TITLE_TOO_LONG);

        let errors = require_unique_title(Err(errors), Some(1), None).unwrap_err();
        assert_eq!(errors.get("title"), Some(messages::TITLE_TOO_LONG));
    }
}
