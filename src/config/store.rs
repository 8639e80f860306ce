//! Shared configuration storage.
//!
//! The UI reads the config whenever a page is opened, so a reload takes
//! effect on the next page visit. Command line overrides are kept apart
//! from the file contents so they survive a reload.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::{Config, Overrides};

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    overrides: Overrides,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            overrides: Overrides::default(),
            path,
        }
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Get the current config with overrides applied.
    pub fn get(&self) -> Config {
        let mut config = self.inner.read().clone();
        self.overrides.apply(&mut config);
        config
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reload_failure_keeps_previous_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sorting]\ndelay_ms = 500\n").unwrap();

        let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
        assert_eq!(store.get().sorting.delay_ms, 500);

        fs::write(&path, "[sorting]\ndelay_ms = 10\n").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.get().sorting.delay_ms, 500);
    }

    #[test]
    fn overrides_survive_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[sound]\nenabled = true\n").unwrap();

        let store = ConfigStore::new(Config::default(), path).with_overrides(Overrides {
            mute: true,
            ..Overrides::default()
        });
        store.reload().unwrap();
        assert!(!store.get().sound.enabled);
    }
}
