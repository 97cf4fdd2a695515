//! Persisted grid defaults (`config.yaml` in the user config dir)

use std::path::Path;

use anyhow::Context;

use serde::{Deserialize, Serialize};

/// Grid defaults that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Enter on the last row appends an empty record
    #[serde(default)]
    pub auto_add_row: bool,
    /// Disallow keyboard row insertion and paste auto-grow
    #[serde(default)]
    pub lock_rows: bool,
    /// Eager commits for text columns created by the driver
    #[serde(default = "default_continuous_updates")]
    pub continuous_updates: bool,
}

fn default_continuous_updates() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            auto_add_row: false,
            lock_rows: false,
            continuous_updates: default_continuous_updates(),
        }
    }
}

impl GridConfig {
    /// Config from the user config dir, or defaults
    pub fn load() -> Self {
        crate::config_paths::config_file()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Config at `path`. A missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "loaded grid config");
                config
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no grid config, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring grid config: {:#}", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let yaml = std::fs::read_to_string(path).context("reading")?;
        let config = serde_yaml::from_str(&yaml).context("parsing")?;
        Ok(Some(config))
    }

    /// Write to the user config dir
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow::anyhow!("no home or config directory"))?;
        self.save_to(&path)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved grid config");
        Ok(())
    }
}
