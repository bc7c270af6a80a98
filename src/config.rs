use std::{fs, io, path::Path};

use anyhow::{Context as _, Result};
use serde::Deserialize;

pub const DEFAULT_DB_URL: &str = "rallye.sqlite";
pub const DEFAULT_POOL_SIZE: u32 = 8;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db_url: Option<String>,
    pub pool_size: Option<u32>,
}

impl Config {
    /// Reads the configuration file. A missing file is not an error,
    /// all values have defaults.
    pub fn try_load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).context(format!("Failed to read {}", path.display()));
            }
        };
        toml::from_str(&contents).context(format!("Failed to parse {}", path.display()))
    }
}
