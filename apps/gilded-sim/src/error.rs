//! Simulation error types.

use std::path::PathBuf;

use gilded_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop the simulation before or while it prints.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read inventory {path}: {source}")]
    ReadInventory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
