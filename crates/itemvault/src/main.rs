mod app;
mod config;
mod handlers;
mod service;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemvault_core::storage::{BlobStore, KeyValueStore};

use crate::{
    app::create_app,
    config::Config,
    state::AppState,
    storage::{DynamoKeyValueStore, S3BlobStore},
};

/// ItemVault - redundant dual-store CRUD API for items
#[derive(Parser, Debug)]
#[command(name = "itemvault")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "8000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemvault=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let (kv, blobs) = init_stores(&config).await;

    // Provision the backing resources before the listener binds. Failing
    // here aborts startup rather than serving against a missing store.
    kv.ensure_ready().await?;
    blobs.ensure_ready().await?;

    let state = AppState::new(kv, blobs);
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Build the AWS clients and store handles from configuration.
///
/// Both clients share the default credential chain and region; endpoints
/// can be overridden individually for local backends (local DynamoDB,
/// LocalStack, MinIO). The handles are long-lived and shared across all
/// requests.
async fn init_stores(config: &Config) -> (Arc<dyn KeyValueStore>, Arc<dyn BlobStore>) {
    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .load()
        .await;

    let mut dynamodb_builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.dynamodb_endpoint {
        dynamodb_builder = dynamodb_builder.endpoint_url(endpoint);
    }
    let dynamodb_client = aws_sdk_dynamodb::Client::from_conf(dynamodb_builder.build());

    let mut s3_builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.s3_endpoint {
        // Path-style addressing for LocalStack/MinIO compatibility.
        s3_builder = s3_builder.endpoint_url(endpoint).force_path_style(true);
    }
    let s3_client = aws_sdk_s3::Client::from_conf(s3_builder.build());

    let kv: Arc<dyn KeyValueStore> = Arc::new(DynamoKeyValueStore::new(
        dynamodb_client,
        config.table_name.clone(),
    ));
    let blobs: Arc<dyn BlobStore> =
        Arc::new(S3BlobStore::new(s3_client, config.bucket_name.clone()));

    (kv, blobs)
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
