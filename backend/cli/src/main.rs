use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use media::BlobStore;
use pixelvault_config::{self as config, VaultConfig};
use pixelvault_gateway::{build_router, start_server, AppState};
use pixelvault_ingest::IngestPipeline;
use pixelvault_logging::{init_console_logger, init_logger};
use pixelvault_store::{CredentialStore, ImageStore, SqliteCredentialStore};

#[derive(Parser)]
#[command(name = "pixelvault")]
#[command(about = "PixelVault — image upload and gallery service")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to <data dir>/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the PixelVault HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show current server status
    Status,
    /// Add (or replace) a login user in the credential store
    UserAdd {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config::config_file_path(&config::data_dir()));
    let config = config::load_and_prepare(&config_path).await?;

    match config.logging.dir.as_deref() {
        Some(dir) => init_logger(dir, &config.logging.level),
        None => init_console_logger(&config.logging.level),
    }

    match cli.command {
        Commands::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.server.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!(
                        "PixelVault is not running on port {}",
                        config.server.port
                    );
                }
            }
        }
        Commands::UserAdd { email, password } => {
            let credentials = SqliteCredentialStore::open(&config.storage.db_path)?;
            credentials.add_user(&email, &password).await?;
            println!("Stored credentials for {email}");
        }
    }

    Ok(())
}

async fn run_server(config: VaultConfig) -> Result<()> {
    info!(
        port = config.server.port,
        bind = %config.server.bind_address,
        db = %config.storage.db_path.display(),
        uploads = %config.storage.upload_dir.display(),
        "Starting PixelVault"
    );

    // Both stores open on startup and stay open for the process lifetime;
    // every request reuses these handles.
    let metadata = Arc::new(ImageStore::open(&config.storage.db_path)?);
    let credentials: Arc<dyn CredentialStore> =
        Arc::new(SqliteCredentialStore::open(&config.storage.db_path)?);
    let blobs = BlobStore::open(&config.storage.upload_dir).await?;

    let pipeline = Arc::new(IngestPipeline::new(
        blobs.clone(),
        Arc::clone(&metadata),
        config.server.base_url(),
    ));

    let state = AppState {
        metadata,
        blobs,
        pipeline,
        credentials,
    };

    let app = build_router(state, config.server.cors_origin.as_deref());
    start_server(&config.server.bind_address, config.server.port, app).await
}
