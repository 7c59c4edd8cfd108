// ABOUTME: Entry point for the fragmentd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fragment_server::{ConfigResource, create_router};

/// Static server for the fragment web app with a password-guarded
/// JSON configuration resource.
#[derive(Parser, Debug)]
#[command(name = "fragmentd")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration document
    #[arg(short, long, env = "CONFIG_FILE")]
    config: PathBuf,

    /// Hex SHA-256 digest of the write password; omit to disable writes
    #[arg(short, long, env = "CONFIG_PASS")]
    password_hash: Option<String>,

    /// Socket address to bind
    #[arg(long, env = "FRAGMENT_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,

    /// Directory holding the compiled front-end bundle
    #[arg(long, env = "FRAGMENT_ASSETS", default_value = "./static")]
    assets: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let resource = Arc::new(ConfigResource::open(&args.config, args.password_hash)?);
    tracing::info!(
        "configuration document at {} ({})",
        args.config.display(),
        if resource.writable() {
            "read-write"
        } else {
            "read-only"
        }
    );

    let app = create_router(resource, &args.assets);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("fragmentd listening on {}", args.bind);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fragmentd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();
}
