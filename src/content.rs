//! Markdown content pages and blog posts.
//!
//! Each page is a markdown file that opens with a TOML frontmatter block
//! fenced by `---` lines. Pages live at `CONTENT_DIR/<name>.md`, posts at
//! `CONTENT_DIR/blog/<slug>.md`. A post's slug is always its file stem.

use std::path::Path;

use chrono::NaiveDate;
use pulldown_cmark::{Options, Parser, html};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const BLOG_DIR: &str = "blog";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogInfo {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub slug: String,
}

/// Frontmatter plus the rendered markdown body.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub info: T,
    pub html: String,
}

/// Split `raw` into its frontmatter block and the markdown after it.
///
/// Returns `None` when the file does not open with a closed `---` fence.
#[must_use]
pub fn split_frontmatter(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix("---")?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse frontmatter as `T` and render the body. `origin` names the file in errors.
pub fn parse_page<T: DeserializeOwned>(raw: &str, origin: &str) -> Result<Page<T>, AppError> {
    let (front, body) = split_frontmatter(raw).ok_or_else(|| AppError::Frontmatter(origin.to_string()))?;
    let info = toml::from_str(front).map_err(|e| AppError::Frontmatter(format!("{origin}: {e}")))?;
    Ok(Page { info, html: render_markdown(body) })
}

/// Render site-authored markdown. Raw HTML passes through.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}

/// Slugs are file stems: ASCII letters, digits, `-` and `_`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Load the top-level page `name` (without extension).
pub async fn load_page(content_dir: &Path, name: &str) -> Result<Page<PageInfo>, AppError> {
    let path = content_dir.join(format!("{name}.md"));
    let raw = read_content(&path).await?;
    parse_page(&raw, &path.display().to_string())
}

/// Load one blog post by slug.
pub async fn load_post(content_dir: &Path, slug: &str) -> Result<Page<BlogInfo>, AppError> {
    if !is_valid_slug(slug) {
        return Err(AppError::NotFound(format!("blog/{slug}")));
    }
    let path = content_dir.join(BLOG_DIR).join(format!("{slug}.md"));
    let raw = read_content(&path).await?;
    let mut page: Page<BlogInfo> = parse_page(&raw, &path.display().to_string())?;
    page.info.slug = slug.to_string();
    Ok(page)
}

/// List blog posts, newest first. A missing blog directory is an empty blog.
pub async fn list_posts(content_dir: &Path) -> Result<Vec<BlogInfo>, AppError> {
    let dir = content_dir.join(BLOG_DIR);
    let mut folder = match tokio::fs::read_dir(&dir).await {
        Ok(folder) => folder,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut posts = Vec::new();
    while let Some(entry) = folder.next_entry().await? {
        let path = entry.path();
        let Some(slug) = post_slug(&path) else { continue };
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let raw = tokio::fs::read_to_string(&path).await?;
        let mut page: Page<BlogInfo> = parse_page(&raw, &path.display().to_string())?;
        page.info.slug = slug;
        posts.push(page.info);
    }
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(posts)
}

fn post_slug(path: &Path) -> Option<String> {
    if path.extension()? != "md" {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    is_valid_slug(stem).then(|| stem.to_string())
}

async fn read_content(path: &Path) -> Result<String, AppError> {
    match tokio::fs::read_to_string(path).await {
        Ok(raw) => Ok(raw),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(path.display().to_string())),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
