/// webcig Server - GraphQL API and pages for webcig
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webcig_core::InMemoryUserStore;
use webcig_server::{build_app, build_schema, config::ConfigOverrides, ServerConfig};

#[derive(Parser)]
#[command(name = "webcig-server")]
#[command(about = "webcig GraphQL web server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "WEBCIGPORT")]
        port: Option<u16>,

        /// Directory holding base.html and graphiql.html
        #[arg(long, env = "WEBCIG_TEMPLATE_DIR")]
        template_dir: Option<PathBuf>,

        /// Directory holding js/ and css/
        #[arg(long, env = "WEBCIG_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Print the GraphQL schema in SDL and exit
    Schema {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "webcig_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            config,
            host,
            port,
            template_dir,
            static_dir,
        } => {
            let overrides = ConfigOverrides {
                host,
                port,
                template_dir,
                static_dir,
            };
            serve(config, overrides).await?;
        }
        Commands::Schema { config } => {
            print_schema(config)?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load(config_path.as_deref())?;
    config.apply(overrides);

    tracing::info!("Starting webcig server");
    tracing::info!("Templates: {:?}", config.web.template_dir);
    tracing::info!("Static files: {:?}", config.web.static_dir);

    // Validates config, loads templates and builds the schema
    let app = build_app(&config).await?;

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_schema(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    let schema = build_schema(Arc::new(InMemoryUserStore::seeded()), &config.graphql)?;
    println!("{}", schema.sdl());
    Ok(())
}
