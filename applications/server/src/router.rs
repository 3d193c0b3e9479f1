/// HTTP router and application assembly
use crate::{
    api,
    config::ServerConfig,
    error::Result,
    graphql::{self, SharedUserStore},
    state::AppState,
    templates::Templates,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};
use webcig_core::InMemoryUserStore;

/// Build shared state from configuration: load templates, seed the store and
/// construct the schema. Any failure here is fatal to startup.
pub async fn build_state(config: &ServerConfig) -> Result<AppState> {
    let templates = Templates::load(&config.web.template_dir).await?;
    tracing::info!("Templates loaded from {:?}", config.web.template_dir);

    let store: SharedUserStore = Arc::new(InMemoryUserStore::seeded());
    let schema = graphql::build_schema(Arc::clone(&store), &config.graphql)?;
    tracing::info!("GraphQL schema built");

    Ok(AppState::new(
        store,
        schema,
        Arc::new(templates),
        Arc::new(config.web.clone()),
    ))
}

pub fn create_router(app_state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(api::pages::home))
        .route("/graphiql/", get(api::pages::graphiql))
        .route(api::pages::GRAPHQL_ENDPOINT, post(api::graphql::graphql))
        .route("/health", get(api::health::health))
        .nest_service("/js", ServeDir::new(static_dir.join("js")))
        .nest_service("/css", ServeDir::new(static_dir.join("css")))
        .fallback(api::pages::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Validated configuration to ready-to-serve router
pub async fn build_app(config: &ServerConfig) -> Result<Router> {
    config.validate()?;
    let app_state = build_state(config).await?;
    Ok(create_router(app_state, &config.web.static_dir))
}
