use super::SettingsError;
use std::io;
use thiserror::Error;

/// Error type returned by MPS writing
#[derive(Error, Debug)]
pub enum MpsError {
    /// the destination could not be created or written
    #[error("MPS write failed: {0}")]
    Io(#[from] io::Error),
    /// the settings are not valid
    #[error("Invalid MPS settings: {0}")]
    Settings(#[from] SettingsError),
}
