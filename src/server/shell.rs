use axum::response::Html;

/// GET / - the embedded shell page
pub async fn handler() -> Html<&'static str> {
    Html(include_str!("../../assets/shell.html"))
}
