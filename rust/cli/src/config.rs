//! CLI configuration: defaults, an optional TOML file, and an environment
//! override for the file location (`VENTUNO_CONFIG`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Config file looked up in the working directory when `VENTUNO_CONFIG`
/// is not set.
pub const DEFAULT_CONFIG_FILE: &str = "ventuno.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default display name for the first seat.
    pub player_one: String,
    /// Default display name for the second seat.
    pub player_two: String,
    /// Directory for game record output.
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_one: "Player 1".into(),
            player_two: "Player 2".into(),
            data_dir: "data".into(),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    #[default]
    Default,
    File,
}

impl ValueSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub player_one: ValueSource,
    pub player_two: ValueSource,
    pub data_dir: ValueSource,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Partial file shape: every key is optional and falls back to defaults.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    player_one: Option<String>,
    player_two: Option<String>,
    data_dir: Option<String>,
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    if let Ok(path) = std::env::var("VENTUNO_CONFIG") {
        return load_from_path(path);
    }
    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return load_from_path(DEFAULT_CONFIG_FILE);
    }
    Ok(ConfigResolved {
        config: Config::default(),
        sources: ConfigSources::default(),
    })
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<ConfigResolved, ConfigError> {
    let s = fs::read_to_string(path)?;
    let f: FileConfig = toml::from_str(&s)?;
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();
    if let Some(v) = f.player_one {
        cfg.player_one = v;
        sources.player_one = ValueSource::File;
    }
    if let Some(v) = f.player_two {
        cfg.player_two = v;
        sources.player_two = ValueSource::File;
    }
    if let Some(v) = f.data_dir {
        cfg.data_dir = v;
        sources.data_dir = ValueSource::File;
    }
    Ok(ConfigResolved { config: cfg, sources })
}
