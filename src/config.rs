use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Value {value} for field '{field}' is out of range (min: {min}, max: {max})")]
    OutOfRange {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Settings shared by the exercise binaries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Comma separated `title,year,stars` file read by the movie list.
    pub movies_file: PathBuf,
    /// Base column width of the movie table.
    pub column_width: usize,
    /// Offset exercised by the positional list harness.
    pub offset: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            movies_file: PathBuf::from("movies.txt"),
            column_width: 8,
            offset: 5,
        }
    }
}

impl Config {
    pub const ENV_VAR: &'static str = "COURSEWORK_CONFIG";
    pub const DEFAULT_PATH: &'static str = "coursework.toml";
    pub const MAX_OFFSET: usize = 10_000;
    pub const MAX_COLUMN_WIDTH: usize = 200;

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                info!(path = %path.display(), "loaded config");
                Self::from_toml_str(&content)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Loads the file named by `COURSEWORK_CONFIG`, or `coursework.toml`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The harness swaps at `offset - 1`, which must be a real position.
        check_range("offset", self.offset, 2, Self::MAX_OFFSET)?;
        check_range("column_width", self.column_width, 2, Self::MAX_COLUMN_WIDTH)
    }
}

fn check_range(
    field: &'static str,
    value: usize,
    min: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
