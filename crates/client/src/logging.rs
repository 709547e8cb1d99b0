//! Logging setup for the simulation binary.
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_FILE: &str = "sim.log";

/// Installs a stderr layer and, when a log directory can be resolved and
/// created, a file layer writing `sim.log` there.
///
/// `RUST_LOG` selects the filter (default `info`). If the directory cannot be
/// created, logging continues on stderr only. The returned guard must live
/// until exit, or buffered file output is lost.
pub fn setup_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr);

    let target = resolve_log_dir(log_dir);
    let (file_layer, guard) = match &target {
        Ok(Some(dir)) => {
            let appender = tracing_appender::rolling::never(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        Ok(None) | Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    match target {
        Ok(Some(dir)) => tracing::info!("Log file: {}", dir.join(LOG_FILE).display()),
        Ok(None) => tracing::warn!("No log directory available; logging to stderr only"),
        Err((dir, err)) => tracing::warn!(
            "Cannot create log directory {}: {}; logging to stderr only",
            dir.display(),
            err
        ),
    }
    guard
}

/// Picks the log directory and makes sure it exists.
fn resolve_log_dir(log_dir: Option<&Path>) -> Result<Option<PathBuf>, (PathBuf, std::io::Error)> {
    let Some(dir) = log_dir.map(Path::to_path_buf).or_else(default_log_dir) else {
        return Ok(None);
    };
    match std::fs::create_dir_all(&dir) {
        Ok(()) => Ok(Some(dir)),
        Err(err) => Err((dir, err)),
    }
}

/// Platform cache directory, e.g. `~/.cache/dungeon-sim/logs` on Linux.
fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dungeon-sim").map(|dirs| dirs.cache_dir().join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_the_requested_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("nested").join("logs");

        let resolved = resolve_log_dir(Some(&dir)).unwrap();

        assert_eq!(resolved.as_deref(), Some(dir.as_path()));
        assert!(dir.is_dir());
    }

    #[test]
    fn unusable_directory_is_reported_not_fatal() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("taken");
        std::fs::write(&file, "not a directory").unwrap();

        let (dir, _) = resolve_log_dir(Some(&file.join("logs"))).unwrap_err();

        assert_eq!(dir, file.join("logs"));
    }
}
