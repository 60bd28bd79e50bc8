use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// Two-tab page: Resume Analysis and Interview Practice.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
