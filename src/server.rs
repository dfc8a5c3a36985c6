//! Http front end: the search page and its form submission.
//!
//! - `GET /` - page with the empty search form
//! - `POST /` - search for the `name` form field and render the results
//!
//! Both routes always answer 200; upstream failures are rendered into
//! the page as text.

use askama::Template;
use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::history::MatchHistory;
use crate::lol_api::UNEXPECTED_ERROR;
use crate::render::page::PageTemplate;

/// Body of the search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub name : String,
}

/// Create the application router.
pub fn create_router(history : MatchHistory) -> Router {
    Router::new()
        .route("/", get(index_handler).post(search_handler))
        .with_state(history)
        .layer(TraceLayer::new_for_http())
}

/// Serve until the listener fails.
pub async fn serve(listener : TcpListener, history : MatchHistory) -> std::io::Result<()> {
    axum::serve(listener, create_router(history)).await
}

async fn index_handler() -> Html<String> {
    into_html(PageTemplate::index())
}

/// A body that isn't a valid form is searched as an empty identifier,
/// which fails identifier validation and renders that message.
async fn search_handler(
    State(history) : State<MatchHistory>,
    form : Result<Form<SearchForm>, FormRejection>,
) -> Html<String> {

    let identifier = match form {
        Ok(Form(form)) => form.name,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable search form");
            String::new()
        }
    };

    tracing::info!(identifier = %identifier, "searching");
    let body = history.lookup(&identifier).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "rendering results failed");
        UNEXPECTED_ERROR.to_string()
    });
    into_html(PageTemplate::results(&identifier, &body))
}

/// A page that fails to render still answers 200, with the fallback text.
fn into_html(page : PageTemplate<'_>) -> Html<String> {
    Html(page.render().unwrap_or_else(|e| {
        tracing::error!(error = %e, "rendering page failed");
        UNEXPECTED_ERROR.to_string()
    }))
}
