use std::path::{Path, PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=warn";
const LOG_FILE_NAME: &str = "backend.log";

/// `logs/backend.log` next to the executable, or under `target/` when the
/// executable path is unknown.
fn log_file_path(exe_dir: Option<&Path>) -> PathBuf {
    exe_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("target"))
        .join("logs")
        .join(LOG_FILE_NAME)
}

/// Initializes tracing
///
/// Logs go to:
/// - stdout (coloured)
/// - logs/backend.log next to the executable (plain)
pub fn initialize() -> anyhow::Result<()> {
    let exe = std::env::current_exe().ok();
    let log_file_path = log_file_path(exe.as_deref().and_then(Path::parent));

    if let Some(log_dir) = log_file_path.parent() {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e)
        })?;
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e))?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_level))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    tracing::info!(
        "Logging initialized (level: {}, file: {})",
        log_level,
        log_file_path.display()
    );
    Ok(())
}
