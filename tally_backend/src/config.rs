use std::{
    error::Error,
    fmt, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::counter::Strategy;

pub const DEFAULT_CONFIG_FILE: &str = "tally-config.toml";

fn default_strategy() -> Strategy {
    Strategy::Recursive
}

fn default_log_file() -> PathBuf {
    PathBuf::from("output.tally.log")
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TallyConfig {
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    pub max_depth: Option<u64>,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            log_file: default_log_file(),
            max_depth: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, .. } => {
                write!(f, "failed to read config file {}", path.display())
            }
            ConfigError::Parse(_) => write!(f, "failed to parse TOML config"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl TallyConfig {
    pub fn from_toml_str(config_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(config_str).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&config_str)
    }
}
