use super::Config;
use crate::error::{Result, StatsError};
use log::{debug, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the stored query
pub const STORE_FILE_NAME: &str = "stored-query.json";

/// Persists a [`Config`] as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct QueryStore {
    path: PathBuf,
}

impl QueryStore {
    /// Creates a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store next to the running executable
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::new(exe.with_file_name(STORE_FILE_NAME)))
    }

    /// Returns the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored query
    ///
    /// Fails with [`StatsError::ConfigLoad`] if the file is missing or is
    /// not a valid query document.
    pub fn load(&self) -> Result<Config> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| StatsError::ConfigLoad(format!("{}: {}", self.path.display(), e)))?;

        let config = serde_json::from_str(&content)
            .map_err(|e| StatsError::ConfigLoad(format!("{}: {}", self.path.display(), e)))?;

        debug!("Loaded stored query from {}", self.path.display());
        Ok(config)
    }

    /// Returns the stored file verbatim, if there is one
    pub fn read_raw(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    /// Writes the query, replacing any previous one
    pub async fn save(&self, config: &Config) -> Result<()> {
        let content = to_pretty_json(config)?;

        tokio::fs::write(&self.path, content)
            .await
            .map_err(StatsError::ConfigWrite)?;

        info!("Stored query in {}", self.path.display());
        Ok(())
    }

    /// Deletes the stored query
    ///
    /// Returns `false` when there was nothing to delete.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed stored query {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StatsError::IO(e)),
        }
    }
}

/// Serializes with a 4-space indent
fn to_pretty_json(config: &Config) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    config.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| StatsError::IO(io::Error::new(io::ErrorKind::InvalidData, e)))
}
