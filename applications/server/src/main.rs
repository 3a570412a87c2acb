/// Tier Server - account registration, login and plan upgrades
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tier_core::AccountStore;
use tier_server::{api, config::ServerConfig, services::AccountService, shutdown, state::AppState};
use tier_storage::MemoryAccountStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tier-server")]
#[command(about = "Tier account and subscription server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "TIER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print the effective configuration and exit
    Config {
        /// Configuration file path
        #[arg(short, long, env = "TIER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tier_server=info,tier_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Config { config } => {
            let config = ServerConfig::load(config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Tier Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("CORS origin: {}", config.cors.origin);

    // Accounts live for the lifetime of this function only
    let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
    let accounts = Arc::new(AccountService::new(store));
    tracing::info!("Account store initialized (in-memory)");

    let app_state = AppState::new(Arc::clone(&accounts));
    let app = api::create_router(app_state, &config.cors)?;

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    let discarded = accounts.account_count().await?;
    tracing::info!("Server stopped, discarding {} accounts", discarded);

    Ok(())
}
