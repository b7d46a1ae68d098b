//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Write DTOs built from validated form input

pub mod article;
pub mod comment;
