//! The chat widget page.

use axum::response::Html;

const CHAT_PAGE_HTML: &str = include_str!("../../../static/chat.html");

/// GET / - Serves the widget that talks to `/webchat/message`
pub async fn chat_page() -> Html<&'static str> {
    Html(CHAT_PAGE_HTML)
}
