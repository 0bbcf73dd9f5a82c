use blackout_core::{DEFAULT_PLACEHOLDER, RedactionPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Simple configuration for blackout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Fixed seed for the selector; fresh entropy per run when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Text shown in place of hidden words
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    #[serde(default)]
    pub redaction: RedactionPolicy,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            placeholder: default_placeholder(),
            redaction: RedactionPolicy::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("movies.json")
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(&path, content)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "blackout", "blackout") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.blackout/config.toml")
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let p = self.redaction.hide_probability;
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!("redaction.hide_probability must be within 0.0..=1.0, got {}", p);
        }
        if self.redaction.min_term_len == 0 {
            anyhow::bail!("redaction.min_term_len must be at least 1");
        }
        Ok(())
    }
}
