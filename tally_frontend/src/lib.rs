use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tally_backend::{Strategy, TallyConfig, DEFAULT_CONFIG_FILE};

pub mod driver;
pub mod logging;

/// Counts down from a number to 1 and back up again, recursively.
#[derive(Parser, Debug, Default)]
#[clap(name = "tally", version)]
pub struct TallyArgs {
    /// Number to count to; prompted for on standard input when omitted.
    #[clap(allow_negative_numbers = true)]
    pub number: Option<i64>,
    /// TOML config file [default: tally-config.toml, if present]
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// `recursive` or `iterative`; overrides the config file.
    #[clap(short, long)]
    pub strategy: Option<Strategy>,
    /// Largest recursion depth allowed; overrides the config file.
    #[clap(short = 'd', long)]
    pub max_depth: Option<u64>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl TallyArgs {
    /// Loads the config file and applies command-line overrides on top of it.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn resolve_config(&self) -> Result<(TallyConfig, ConfigSource)> {
        let (mut config, source) = match &self.config {
            Some(path) => {
                let config = TallyConfig::load(path)
                    .with_context(|| format!("cannot use config {}", path.display()))?;
                (config, ConfigSource::File(path.clone()))
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    let config = TallyConfig::load(&path)
                        .with_context(|| format!("cannot use config {}", path.display()))?;
                    (config, ConfigSource::File(path))
                } else {
                    (TallyConfig::default(), ConfigSource::Defaults)
                }
            }
        };

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = Some(max_depth);
        }
        Ok((config, source))
    }
}
