//! tasklet - a terminal task list backed by a remote REST task service.
//!
//! This is the main binary that launches the TUI application. An optional
//! first argument names the configuration file to use instead of the
//! default locations.

use std::{
    env,
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{Context, anyhow};
use tasklet_client::{HttpGateway, TaskService};
use tasklet_config::{Config, persistence::default_log_path};
use tasklet_tui::{
    App,
    terminal::{self, TerminalGuard},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log file location.
const ENV_LOG_FILE: &str = "TASKLET_LOG_FILE";

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn,tasklet=info,tasklet_client=info,tasklet_tui=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The terminal belongs to the UI, so logs go to a file. Running without
    // them is fine.
    if let Err(e) = init_tracing() {
        eprintln!("tasklet: logging disabled: {e:#}");
    }

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load_or_default_locations(config_path.as_deref())
        .context("failed to load configuration")?;
    info!(
        base_url = %config.api.base_url,
        root = %config.api.root,
        recent_limit = config.recent_limit,
        "starting"
    );

    let gateway = HttpGateway::new(&config.api).context("failed to create HTTP client")?;
    let service = TaskService::new(gateway);

    terminal::install_panic_hook();
    let mut guard = TerminalGuard::new()?;

    let mut app = App::new(service, config);
    let result = app.run(&mut guard).await;

    // Always restore terminal, even if app.run() failed
    guard.restore()?;

    result
}

/// Installs a `fmt` subscriber writing to the log file.
fn init_tracing() -> anyhow::Result<()> {
    let path = match env::var_os(ENV_LOG_FILE) {
        Some(path) => PathBuf::from(path),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
