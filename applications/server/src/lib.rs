//! webcig Server Library
//!
//! Web server exposing a relay-style GraphQL API over an in-memory user store,
//! plus the home page, the GraphiQL page and static assets.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod graphql;
pub mod router;
pub mod state;
pub mod templates;

// Re-export commonly used types for convenience
pub use config::{ConfigOverrides, ServerConfig};
pub use error::{Result, ServerError};
pub use graphql::{build_schema, WebcigSchema};
pub use router::{build_app, build_state, create_router};
pub use state::AppState;
