//! Templated markdown pages and the blog.

use axum::extract::{Path, State};
use axum::response::Html;
use tera::Context;

use crate::content;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /about` — `content/about.md`.
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    markdown_page(&state, "about").await
}

/// `GET /changelog` — `content/changelog.md`.
pub async fn changelog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    markdown_page(&state, "changelog").await
}

/// `GET /blog` — post list, newest first.
pub async fn blog(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let posts = content::list_posts(&state.config.content_dir).await?;
    let mut context = Context::new();
    context.insert("active", "blog");
    context.insert("posts", &posts);
    Ok(Html(state.templates.render("blog.html", &mut context)?))
}

/// `GET /blog/{slug}` — one post.
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    let page = content::load_post(&state.config.content_dir, &slug).await?;
    let mut context = Context::new();
    context.insert("active", "blog");
    context.insert("post", &page.info);
    context.insert("content", &page.html);
    Ok(Html(state.templates.render("blog-post.html", &mut context)?))
}

async fn markdown_page(state: &AppState, name: &str) -> Result<Html<String>, AppError> {
    let page = content::load_page(&state.config.content_dir, name).await?;
    let mut context = Context::new();
    context.insert("title", &page.info.title);
    context.insert("active", name);
    context.insert("content", &page.html);
    Ok(Html(state.templates.render("page.html", &mut context)?))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
