/// Common test utilities and fixtures
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use webcig_core::{CreateUser, InMemoryUserStore, UserStore};
use webcig_server::{
    build_schema,
    config::{ConfigOverrides, GraphQlSettings},
    graphql::SharedUserStore,
    ServerConfig, WebcigSchema,
};

/// Templates shipped with the server
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Static directory with one js and one css file
pub fn create_static_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("js")).unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("js").join("app.js"), fixtures::APP_JS).unwrap();
    std::fs::write(dir.path().join("css").join("app.css"), fixtures::APP_CSS).unwrap();
    dir
}

/// Config pointing at the shipped templates and the given static dir
pub fn test_config(static_dir: &Path) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.apply(ConfigOverrides {
        template_dir: Some(shipped_templates()),
        static_dir: Some(static_dir.to_path_buf()),
        ..ConfigOverrides::default()
    });
    config.web.graphiql_title = fixtures::GRAPHIQL_TITLE.to_string();
    config
}

/// Seeded store plus `extra` users created in order (ids 2, 3, ...)
pub async fn create_test_store(extra: &[&str]) -> SharedUserStore {
    let store = InMemoryUserStore::seeded();
    for name in extra {
        store
            .create(CreateUser::new(*name, format!("{}@example.com", name.to_lowercase())))
            .await
            .unwrap();
    }
    Arc::new(store)
}

/// Schema over `store` with default limits
pub fn create_test_schema(store: SharedUserStore) -> WebcigSchema {
    build_schema(store, &GraphQlSettings::default()).unwrap()
}

pub mod fixtures {
    pub const GRAPHIQL_TITLE: &str = "Test GraphQL Explorer";
    pub const APP_JS: &str = "console.log('webcig');\n";
    pub const APP_CSS: &str = "body { margin: 0; }\n";
}
