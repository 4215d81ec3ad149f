//! Configuration layer: optional config file overlaid by runtime parameters.
//!
//! Precedence (highest to lowest): CLI flag, environment variable, config file,
//! built-in default. Flag-versus-environment is settled by the argument parser
//! before [`resolve`] sees the [`RawParameters`].

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use config::{Config, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

use crate::args::GlobalArgs;

pub const CONF_TOKEN: &str = "token";
pub const CONF_URL: &str = "url";

/// Runtime parameters gathered from CLI flags and environment variables.
///
/// `None` means "not provided", which is distinct from `Some(false)` or `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
    pub config: Option<PathBuf>,
    pub token: Option<String>,
    pub url: Option<String>,
    pub verbose: Option<bool>,
}

impl From<&GlobalArgs> for RawParameters {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            config: args.config.clone(),
            token: args.token.clone(),
            url: args.url.clone(),
            // An absent `-v` must not mask `verbose: true` from the config file.
            verbose: args.verbose.then_some(true),
        }
    }
}

/// Fully-resolved configuration for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    token: String,
    url: String,
    verbose: bool,
}

impl ResolvedConfig {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl fmt::Display for ResolvedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Config token={} url={} verbose={}>",
            self.token, self.url, self.verbose
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read config file: {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        source: config::ConfigError,
    },
    #[error("Missing required option: --{0}")]
    MissingOption(&'static str),
}

/// Resolve the configuration for this invocation.
///
/// # Errors
///
/// Fails when the config file cannot be read or parsed into a mapping, or when
/// `token` or `url` is empty after every source has been merged.
pub fn resolve(raw: &RawParameters) -> Result<ResolvedConfig, ConfigError> {
    let mut merged = match raw.config.as_deref() {
        Some(path) => load_file(path)?,
        None => RawFileConfig::default(),
    };

    merged.apply_runtime_overrides(raw);
    ResolvedConfig::from_raw(merged)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawFileConfig {
    token: Option<String>,
    url: Option<String>,
    verbose: Option<bool>,
}

impl RawFileConfig {
    fn apply_runtime_overrides(&mut self, raw: &RawParameters) {
        if let Some(token) = raw.token.as_ref() {
            self.token = Some(token.clone());
        }
        if let Some(url) = raw.url.as_ref() {
            self.url = Some(url.clone());
        }
        if let Some(verbose) = raw.verbose {
            self.verbose = Some(verbose);
        }
    }
}

impl ResolvedConfig {
    fn from_raw(raw: RawFileConfig) -> Result<Self, ConfigError> {
        let RawFileConfig {
            token,
            url,
            verbose,
        } = raw;

        // Order matters: `token` is reported before `url`.
        let token = required(token, CONF_TOKEN)?;
        let url = required(url, CONF_URL)?;

        Ok(Self {
            token,
            url,
            verbose: verbose.unwrap_or(false),
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingOption(key))
}

fn load_file(path: &Path) -> Result<RawFileConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document has no top-level mapping.
    if contents.trim().is_empty() {
        return Err(ConfigError::Parse {
            path: path.to_path_buf(),
            source: config::ConfigError::Message("config file is empty".into()),
        });
    }

    Config::builder()
        .add_source(File::from_str(&contents, sniff_format(&contents)))
        .build()
        .and_then(|config| config.try_deserialize::<RawFileConfig>())
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// JSON documents are objects; everything else is handed to the YAML parser,
/// which also accepts JSON-style flow mappings.
fn sniff_format(contents: &str) -> FileFormat {
    if contents.trim_start().starts_with('{') {
        FileFormat::Json
    } else {
        FileFormat::Yaml
    }
}
