use std::io;

use thiserror::Error;

/// Unknown option id supplied for a closed choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    #[error("Unknown travel type: `{0}` (expected solo, couple, family or friends)")]
    TravelType(String),
    #[error("Unknown budget: `{0}` (expected budget, medium or luxury)")]
    Budget(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Destination catalog must contain at least one entry")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<ParseOptionError> for CliError {
    fn from(err: ParseOptionError) -> Self {
        CliError::Input(err.to_string())
    }
}
