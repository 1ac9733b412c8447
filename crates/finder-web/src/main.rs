//! finder-web server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `FINDER_*` environment overrides, connects to the managed backend named
//! by `FINDER_BACKEND_URL` / `FINDER_BACKEND_KEY`, and serves the app.
//! Missing backend settings are fatal at startup.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use finder_backend::{BackendClient, BackendConfig};
use finder_web::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Services Finder web frontend")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FINDER"))
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // The backend endpoint and key come from the environment and are required.
  let backend_cfg = BackendConfig::from_env().context("backend configuration")?;
  let backend =
    BackendClient::new(backend_cfg).context("failed to build backend client")?;

  let state = AppState::new(backend).context("failed to build application state")?;
  state.session.spawn_change_logger();

  let app = finder_web::router(state).layer(TraceLayer::new_for_http());
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
