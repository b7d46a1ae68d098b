//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod article_repo;
pub mod comment_repo;

pub use article_repo::ArticleRepo;
pub use comment_repo::CommentRepo;
