use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use crate::config::Config;
use crate::routes::app;
use crate::state::{AppState, test_helpers};

async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let resp = app(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn repo_state() -> AppState {
    test_helpers::state_with(&["a"])
}

fn state_over(content: &std::path::Path) -> AppState {
    let config = Config { content_dir: content.to_path_buf(), ..test_helpers::repo_config() };
    test_helpers::state_from(config, &["a"])
}

#[tokio::test]
async fn about_page_renders_markdown_in_layout() {
    let (status, body) = get(repo_state(), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>About</title>"));
    assert!(body.contains("<h1>About</h1>"));
    assert!(body.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
    assert!(body.contains("/js/toggle-theme.js"));
}

#[tokio::test]
async fn changelog_page_renders_tables() {
    let (status, body) = get(repo_state(), "/changelog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<table>"));
}

#[tokio::test]
async fn blog_lists_checked_in_posts() {
    let (status, body) = get(repo_state(), "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("href=\"/blog/hello-world\""));
    assert!(body.contains("Hello, world"));
}

#[tokio::test]
async fn blog_post_renders_by_slug() {
    let (status, body) = get(repo_state(), "/blog/hello-world").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2024-01-05"));
    assert!(body.contains("First post."));
}

#[tokio::test]
async fn missing_blog_post_is_404() {
    let (status, _) = get(repo_state(), "/blog/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_blog_renders_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(state_over(dir.path()), "/blog").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Nothing here yet."));
}

#[tokio::test]
async fn frontmatter_escapes_in_titles() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("about.md"), "---\ntitle = \"<b>bold</b>\"\n---\nhi\n").unwrap();
    let (status, body) = get(state_over(dir.path()), "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>&lt;b&gt;bold&lt;&#x2F;b&gt;</title>"));
}

#[tokio::test]
async fn broken_frontmatter_is_500() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("changelog.md"), "no frontmatter here").unwrap();
    let (status, body) = get(state_over(dir.path()), "/changelog").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("Markdown frontmatter error for file:"));
}
