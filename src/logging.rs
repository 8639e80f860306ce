use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log file: `<cache dir>/dsa-arcade/dsa-arcade.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("dsa-arcade").join("dsa-arcade.log")
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to a file. The terminal UI owns stdout, so nothing may be printed there.
pub fn init_file_tracing(config: &LoggingConfig) -> std::io::Result<PathBuf> {
    let path = config.file.clone().unwrap_or_else(default_log_path);
    let file = open_log(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(path)
}

/// Log to stderr, for one-shot commands.
pub fn init_stderr_tracing(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(&config.level))
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_log(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_log_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn default_path_ends_with_log_name() {
        assert!(default_log_path().ends_with("dsa-arcade/dsa-arcade.log"));
    }
}
