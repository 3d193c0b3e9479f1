/// Shared application state
use crate::config::WebSettings;
use crate::graphql::{SharedUserStore, WebcigSchema};
use crate::templates::Templates;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedUserStore,
    pub schema: WebcigSchema,
    pub templates: Arc<Templates>,
    pub web: Arc<WebSettings>,
}

impl AppState {
    pub fn new(
        store: SharedUserStore,
        schema: WebcigSchema,
        templates: Arc<Templates>,
        web: Arc<WebSettings>,
    ) -> Self {
        Self {
            store,
            schema,
            templates,
            web,
        }
    }
}
