//! Tracing setup
//!
//! The TUI owns stdout and stderr, so log output goes to a file under the
//! platform data directory.

use crate::{QuizError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file: $DATA_HOME/banana-quiz/banana-quiz.log
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| QuizError::Config("Unable to determine data directory".to_string()))?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// `explicit` when given, otherwise the default log file
pub fn resolve_log_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => log_file_path(),
    }
}

/// Filter from `RUST_LOG`, falling back to `default_level`
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a global subscriber that appends to `path`
pub fn init_tracing(default_level: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| QuizError::Config(format!("Failed to initialize tracing: {}", e)))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_names_app() {
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with(Path::new(APP_NAME).join(LOG_FILE)));
        }
    }

    #[test]
    fn test_explicit_log_path_skips_data_dir() {
        let explicit = PathBuf::from("/tmp/quiz-logs/run.log");
        assert_eq!(resolve_log_path(Some(explicit.clone())).unwrap(), explicit);
        assert_eq!(resolve_log_path(None).ok(), log_file_path().ok());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join(LOG_FILE);
        // Another test may already own the global subscriber
        let _ = init_tracing("debug", &path);
        assert!(path.exists());
    }
}
