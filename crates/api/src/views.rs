//! Server-rendered pages.
//!
//! Every page is a typed model implementing [`Page`], which binds it to one
//! template. Templates are compiled into the binary and rendered with Tera;
//! the model's fields become the template context.

use gazette_core::article::ArticleForm;
use gazette_core::comment::CommentForm;
use gazette_core::validation::FieldErrors;
use gazette_db::models::article::Article;
use gazette_db::models::comment::Comment;
use serde::Serialize;
use tera::{Context, Tera};

/// A renderable page model.
pub trait Page: Serialize {
    /// Template identifier within [`Views`].
    const TEMPLATE: &'static str;
}

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("article.html", include_str!("../templates/article.html")),
    ("form_fields.html", include_str!("../templates/form_fields.html")),
    ("create.html", include_str!("../templates/create.html")),
    ("update.html", include_str!("../templates/update.html")),
    ("delete.html", include_str!("../templates/delete.html")),
    (
        "comment/comment_index.html",
        include_str!("../templates/comment/comment_index.html"),
    ),
    (
        "comment/form_fields.html",
        include_str!("../templates/comment/form_fields.html"),
    ),
    (
        "comment/create.html",
        include_str!("../templates/comment/create.html"),
    ),
    (
        "comment/update.html",
        include_str!("../templates/comment/update.html"),
    ),
    (
        "comment/delete.html",
        include_str!("../templates/comment/delete.html"),
    ),
];

/// The compiled template set.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parse every embedded template. HTML output is autoescaped.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render<P: Page>(&self, page: &P) -> Result<String, tera::Error> {
        let context = Context::from_serialize(page)?;
        self.tera.render(P::TEMPLATE, &context)
    }
}

// ---------------------------------------------------------------------------
// Article pages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ArticleListPage {
    pub articles: Vec<Article>,
}

impl Page for ArticleListPage {
    const TEMPLATE: &'static str = "index.html";
}

#[derive(Debug, Serialize)]
pub struct ArticleDetailPage {
    pub article: Article,
    /// Newest first.
    pub comments: Vec<Comment>,
}

impl Page for ArticleDetailPage {
    const TEMPLATE: &'static str = "article.html";
}

#[derive(Debug, Serialize)]
pub struct ArticleCreatePage {
    pub form: ArticleForm,
    pub errors: FieldErrors,
}

impl Page for ArticleCreatePage {
    const TEMPLATE: &'static str = "create.html";
}

#[derive(Debug, Serialize)]
pub struct ArticleUpdatePage {
    /// The stored article, unchanged by a rejected submission.
    pub article: Article,
    pub form: ArticleForm,
    pub errors: FieldErrors,
}

impl Page for ArticleUpdatePage {
    const TEMPLATE: &'static str = "update.html";
}

#[derive(Debug, Serialize)]
pub struct ArticleDeletePage {
    pub article: Article,
    /// Comments that go away with the article.
    pub comment_count: i64,
}

impl Page for ArticleDeletePage {
    const TEMPLATE: &'static str = "delete.html";
}

// ---------------------------------------------------------------------------
// Comment pages
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CommentListPage {
    /// Newest first.
    pub comments: Vec<Comment>,
}

impl Page for CommentListPage {
    const TEMPLATE: &'static str = "comment/comment_index.html";
}

#[derive(Debug, Serialize)]
pub struct CommentCreatePage {
    /// The article named in the request path.
    pub article: Article,
    pub form: CommentForm,
    pub errors: FieldErrors,
    /// Choices for the `article` field.
    pub articles: Vec<Article>,
}

impl Page for CommentCreatePage {
    const TEMPLATE: &'static str = "comment/create.html";
}

#[derive(Debug, Serialize)]
pub struct CommentUpdatePage {
    /// The stored comment, unchanged by a rejected submission.
    pub comment: Comment,
    pub form: CommentForm,
    pub errors: FieldErrors,
    pub articles: Vec<Article>,
}

impl Page for CommentUpdatePage {
    const TEMPLATE: &'static str = "comment/update.html";
}

#[derive(Debug, Serialize)]
pub struct CommentDeletePage {
    pub comment: Comment,
}

impl Page for CommentDeletePage {
    const TEMPLATE: &'static str = "comment/delete.html";
}
