//! Project settings: JSON config file merged with command-line flags.
//!
//! ```json
//! { "baseDir": "src", "transforms": ["strip-bom", "vue-script"] }
//! ```
//!
//! A relative `baseDir` is resolved against the config file's directory.
//! Flags win: `--base-dir` replaces `baseDir`, and any `--transform` replaces
//! the whole `transforms` list.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of a config file.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfigFile {
    pub base_dir: Option<PathBuf>,
    pub transforms: Vec<String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base_dir) = &config.base_dir
            && base_dir.is_relative()
        {
            let config_dir = path.parent().unwrap_or(Path::new(""));
            config.base_dir = Some(config_dir.join(base_dir));
        }
        Ok(config)
    }
}

/// Project flags as given on the command line.
#[derive(Debug, Default)]
pub struct ProjectArgs {
    pub base_dir: Option<PathBuf>,
    pub transforms: Vec<String>,
    pub config: Option<PathBuf>,
}

/// Effective settings after merging config and flags.
#[derive(Debug, PartialEq, Eq)]
pub struct Settings {
    pub base_dir: PathBuf,
    pub transforms: Vec<String>,
}

impl ProjectArgs {
    pub fn resolve(&self) -> Result<Settings, ConfigError> {
        let config = match &self.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };
        Ok(self.merge(config))
    }

    fn merge(&self, config: ConfigFile) -> Settings {
        let base_dir = self
            .base_dir
            .clone()
            .or(config.base_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let transforms = if self.transforms.is_empty() {
            config.transforms
        } else {
            self.transforms.clone()
        };
        Settings {
            base_dir,
            transforms,
        }
    }
}
