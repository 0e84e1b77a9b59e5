use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::{ValueEnum, Parser};
use thiserror::Error;

use crate::filter::FilterConfig;

/// Annotate newline-delimited JSON records read from stdin with the
/// version and public/private status of an ip address field.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[clap(value_enum, short, long, ignore_case=true, default_value_t=LogLevel::Error)]
    pub log_level: LogLevel,

    /// TOML file holding the filter settings
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Field holding the ip address, e.g. `ip` or `[src][ip]`
    #[clap(short, long)]
    pub source: Option<String>,

    /// Field receiving the ip version ("4" or "6")
    #[clap(long)]
    pub target_ipv: Option<String>,

    /// Field receiving the public ip flag
    #[clap(long)]
    pub target_pub_ip: Option<String>,

    /// Tag added to records without a valid address (repeatable)
    #[clap(long)]
    pub tag_on_invalid_ip: Vec<String>,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid field reference {0:?}")]
    InvalidFieldRef(String),
    #[error("no source field configured")]
    MissingSource,
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Settings from the config file (if any), overridden by command line flags.
    pub fn filter_config(&self) -> Result<FilterConfig, ConfigError> {
        let mut filter_config = match &self.config {
            Some(path) => load_filter_config(path)?,
            None => FilterConfig::default(),
        };

        if let Some(source) = &self.source {
            filter_config.source = source.clone();
        }
        if let Some(target_ipv) = &self.target_ipv {
            filter_config.target_ipv = target_ipv.clone();
        }
        if let Some(target_pub_ip) = &self.target_pub_ip {
            filter_config.target_pub_ip = target_pub_ip.clone();
        }
        if !self.tag_on_invalid_ip.is_empty() {
            filter_config.tag_on_invalid_ip = self.tag_on_invalid_ip.clone();
        }

        Ok(filter_config)
    }
}

pub fn load_filter_config(path: &Path) -> Result<FilterConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
