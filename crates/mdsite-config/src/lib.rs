use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site-level settings for the preprocessing pipeline.
///
/// Loaded from a TOML file; every field has a default so a partial file
/// is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL used when rewriting `{% link %}` directives.
    pub base_url: String,
    /// Directory holding the markdown sources. Tilde and environment
    /// variables are expanded on load.
    pub docs_dir: PathBuf,
    /// Whether sources carry a leading front-matter block.
    pub front_matter: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://example.org".to_string(),
            docs_dir: PathBuf::from("docs"),
            front_matter: true,
        }
    }
}

impl SiteConfig {
    /// Loads the config from `config_path`. Returns `None` when the file
    /// does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.docs_dir = Self::expand_path(&config.docs_dir).unwrap_or(config.docs_dir);

        Ok(Some(config))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
