//! TOML configuration shared by the binaries. Every key is optional.
//!
//! ```toml
//! seed = 42
//!
//! [autoplay]
//! games = 10
//! steps = 500
//! stop_tile = 2048
//! ```

use std::path::Path;

use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Seed for tile spawns; unset means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub autoplay: Autoplay,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Autoplay {
    #[serde(default = "Autoplay::games")]
    pub games: u64,
    /// Stop a game after this many changed moves.
    #[serde(default)]
    pub steps: Option<u64>,
    /// Stop a game once the highest tile reaches this value.
    #[serde(default)]
    pub stop_tile: Option<u32>,
}

impl Autoplay {
    fn games() -> u64 { 1 }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self { games: Self::games(), steps: None, stop_tile: None }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load `path` if given, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_toml(p),
            None => Ok(Self::default()),
        }
    }
}
