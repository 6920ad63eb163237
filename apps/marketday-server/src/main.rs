use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use accounts::config::AccountsConfig;
use accounts::domain::service::Service;
use accounts::infra::events::TracingEventPublisher;
use accounts::infra::identity::HttpIdentityProvider;
use accounts::infra::storage::migrations::Migrator;
use accounts::infra::storage::sea_orm_repo::SeaOrmProfilesRepository;
use runtime::{default_logging_config, AppConfig, CliArgs};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Marketday Server - account provisioning for the marketplace
#[derive(Parser)]
#[command(name = "marketday-server")]
#[command(about = "Marketday Server - account provisioning for the marketplace")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.display().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config =
        AppConfig::load_or_default(cli.config.as_deref()).context("Failed to load config")?;
    config.apply_cli_overrides(&args);

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Check => {
            // load_or_default already validated structure and types
            println!("Configuration OK");
            Ok(())
        }
        Commands::Run => run_server(config).await,
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let logging = config
        .logging
        .clone()
        .unwrap_or_else(default_logging_config);
    runtime::init_logging_from_config(&logging, Path::new("."));

    let accounts_cfg: AccountsConfig = config.module_config("accounts")?;

    // Database + migrations
    let db_cfg = config
        .database
        .as_ref()
        .ok_or_else(|| anyhow!("database configuration is required"))?;
    let mut opts = sea_orm::ConnectOptions::new(db_cfg.url.clone());
    if let Some(max_conns) = db_cfg.max_conns {
        opts.max_connections(max_conns);
    }
    let db = sea_orm::Database::connect(opts)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", db_cfg.url))?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    // Identity provider client
    let base_url = url::Url::parse(&accounts_cfg.identity_base_url)
        .with_context(|| format!("Invalid identity_base_url '{}'", accounts_cfg.identity_base_url))?;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(accounts_cfg.request_timeout_sec))
        .build()
        .context("Failed to build HTTP client")?;
    let identity = Arc::new(HttpIdentityProvider::new(
        http,
        base_url,
        accounts_cfg.anon_key.clone(),
    ));

    // Wire repository and events to the domain service
    let profiles = Arc::new(SeaOrmProfilesRepository::new(db));
    let events = Arc::new(TracingEventPublisher);
    let service = Arc::new(Service::new(identity, profiles, events));

    let app = accounts::api::rest::routes::router(
        service,
        Duration::from_secs(config.server.timeout_sec),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Marketday server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler, shutting down");
    }
    info!("Shutdown signal received");
}
