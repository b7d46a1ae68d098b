//! Domain layer for the Gazette content application.
//!
//! Holds the submitted form shapes, the validation strategies that turn them
//! into normalized records, and the domain error type. Nothing in here touches
//! the database or HTTP, so the rules can be exercised in plain unit tests.

pub mod article;
pub mod comment;
pub mod error;
pub mod types;
pub mod validation;
