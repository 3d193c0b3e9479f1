/// HTML page routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
    templates::{GRAPHIQL_TEMPLATE, HOME_TEMPLATE},
};
use axum::{extract::State, http::Uri, response::Html};
use serde::Serialize;

/// Path the GraphiQL page sends queries to
pub const GRAPHQL_ENDPOINT: &str = "/graphql/";

/// Values available to page templates
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub title: &'a str,
    pub graphql_endpoint: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            graphql_endpoint: GRAPHQL_ENDPOINT,
        }
    }
}

/// GET / - Home page
pub async fn home(State(app_state): State<AppState>) -> Result<Html<String>> {
    let page = Page::new(&app_state.web.home_title);
    Ok(Html(app_state.templates.render(HOME_TEMPLATE, &page)?))
}

/// GET /graphiql/ - Interactive query page
pub async fn graphiql(State(app_state): State<AppState>) -> Result<Html<String>> {
    let page = Page::new(&app_state.web.graphiql_title);
    Ok(Html(app_state.templates.render(GRAPHIQL_TEMPLATE, &page)?))
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(uri.path().to_string())
}
