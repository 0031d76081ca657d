use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("entry '{id}' is already registered")]
    DuplicateId { id: String },

    #[error("no entry registered under '{id}'")]
    NotFound { id: String },

    #[error("'{id}' is not a valid entry id")]
    InvalidId { id: String },

    #[error("failed to write demonstration output: {0}")]
    Io(#[from] io::Error),
}

impl CatalogueError {
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
