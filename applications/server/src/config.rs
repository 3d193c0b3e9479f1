/// Server configuration
use crate::error::{Result, ServerError};
use crate::templates::{GRAPHIQL_TEMPLATE, HOME_TEMPLATE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "webcig.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub web: WebSettings,

    #[serde(default)]
    pub graphql: GraphQlSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebSettings {
    /// Directory holding `base.html` and `graphiql.html`
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory holding the `js/` and `css/` asset trees
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    #[serde(default = "default_home_title")]
    pub home_title: String,

    #[serde(default = "default_graphiql_title")]
    pub graphiql_title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlSettings {
    /// Maximum selection-set nesting per query
    #[serde(default = "default_depth_limit")]
    pub depth_limit: usize,

    /// Maximum complexity score per query
    #[serde(default = "default_complexity_limit")]
    pub complexity_limit: usize,
}

/// Values supplied on the command line, applied over file and environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub template_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `webcig.toml` is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. WEBCIG_SERVER__PORT=9000
        settings = settings.add_source(
            config::Environment::with_prefix("WEBCIG")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Apply command-line overrides
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(dir) = overrides.template_dir {
            self.web.template_dir = dir;
        }
        if let Some(dir) = overrides.static_dir {
            self.web.static_dir = dir;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.web.template_dir.is_dir() {
            return Err(ServerError::Config(format!(
                "template directory not found at {:?} (set WEBCIG_TEMPLATE_DIR)",
                self.web.template_dir
            )));
        }

        for name in [HOME_TEMPLATE, GRAPHIQL_TEMPLATE] {
            let path = self.web.template_dir.join(name);
            if !path.is_file() {
                return Err(ServerError::Config(format!("template {:?} is missing", path)));
            }
        }

        if !self.web.static_dir.is_dir() {
            return Err(ServerError::Config(format!(
                "static directory not found at {:?} (set WEBCIG_STATIC_DIR)",
                self.web.static_dir
            )));
        }

        if self.graphql.depth_limit == 0 || self.graphql.complexity_limit == 0 {
            return Err(ServerError::Config(
                "graphql depth and complexity limits must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_home_title() -> String {
    "webcig Home".to_string()
}

fn default_graphiql_title() -> String {
    "webcig graphql query interface".to_string()
}

fn default_depth_limit() -> usize {
    16
}

fn default_complexity_limit() -> usize {
    256
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            static_dir: default_static_dir(),
            home_title: default_home_title(),
            graphiql_title: default_graphiql_title(),
        }
    }
}

impl Default for GraphQlSettings {
    fn default() -> Self {
        Self {
            depth_limit: default_depth_limit(),
            complexity_limit: default_complexity_limit(),
        }
    }
}
