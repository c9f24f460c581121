//! Application configuration.
//!
//! Resolves where the application keeps its data. The location defaults to
//! `~/.interview-buddy` and can be moved with `INTERVIEW_BUDDY_HOME`.

use crate::consts::cli_consts::{DATA_DIR_NAME, HOME_ENV_VAR, STORAGE_FILE_NAME};
use crate::storage::FileStore;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
        }
    }

    /// Resolves the configuration from the environment.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if neither the override variable nor a home
    /// directory is available.
    pub fn from_env() -> Result<Self, std::io::Error> {
        let override_dir = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty());
        resolve_data_dir(override_dir.map(PathBuf::from), home::home_dir()).map(Config::new)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE_NAME)
    }

    /// Opens the durable key-value store under the data directory.
    pub fn open_store(&self) -> FileStore {
        FileStore::new(self.storage_path())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn resolve_data_dir(
    override_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    home_dir.map(|home| home.join(DATA_DIR_NAME)).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Could not determine home directory; set {HOME_ENV_VAR}"),
        )
    })
}
