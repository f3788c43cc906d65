//! App configuration
//!
//! Optional `velvet.toml` in the platform config directory. A missing
//! file means defaults; a malformed one is reported and defaults are
//! used, the club opens either way.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use velvet_core::DescriptorPolicy;

/// Stream a real player would be fed (royalty-free club beat)
const DEFAULT_MUSIC_URL: &str = "https://cdn.pixabay.com/audio/2022/10/25/audio_3df2af5b93.mp3";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How new guests get their outfit
    pub descriptor_policy: DescriptorPolicy,
    /// How long the doorman "checks the clipboard", in milliseconds
    pub screening_delay_ms: u64,
    /// Ambient music on at all
    pub music: bool,
    pub music_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            descriptor_policy: DescriptorPolicy::Hash,
            screening_delay_ms: 1500,
            music: true,
            music_url: DEFAULT_MUSIC_URL.to_string(),
        }
    }
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    /// Load from the platform config dir, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Bad config; using defaults");
                Self::default()
            }
        }
    }

    /// Load a config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Parse config directly from TOML content (for testing)
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn screening_delay(&self) -> Duration {
        Duration::from_millis(self.screening_delay_ms)
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "velvet", "velvet")
            .map(|dirs| dirs.config_dir().join("velvet.toml"))
    }
}
