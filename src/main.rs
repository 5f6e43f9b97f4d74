use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_hub::api::build_router;
use league_hub::api::state::AppState;
use league_hub::config::AppConfig;
use league_hub::models::LeagueDoc;
use league_hub::storage::DocumentStore;

#[derive(Parser)]
#[command(name = "league-hub")]
#[command(about = "Sports-league hub: player market, matches, standings and records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the hub server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file and the PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Write an empty league document to the store path
    InitStore {
        /// Overwrite an existing store file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting league-hub v{}", env!("CARGO_PKG_VERSION"));

    let config = if Path::new(&cli.config).exists() {
        AppConfig::from_file(&PathBuf::from(&cli.config))?
    } else {
        AppConfig::default()
    };

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port
                .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
                .unwrap_or(config.server.port);

            let store = DocumentStore::new(config.store.data_file.clone());
            tracing::info!("Serving league document from {:?}", store.path());

            let state = AppState::new(store, config.admin.key.clone(), config.store.public_dir.clone());
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("League hub live at http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::InitStore { force } => {
            let store = DocumentStore::new(config.store.data_file.clone());
            if store.path().exists() && !force {
                eprintln!(
                    "Store already exists at {:?} (use --force to overwrite)",
                    store.path()
                );
                return Ok(());
            }
            store.save(&LeagueDoc::default())?;
            println!("Wrote empty league document to {:?}", store.path());
        }
    }

    Ok(())
}
