//! Error types for nua-deploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for nua-deploy operations
pub type NuaResult<T> = Result<T, NuaError>;

/// Main error type for nua-deploy operations
///
/// None of these are recovered locally: every error aborts the current batch.
#[derive(Error, Debug)]
pub enum NuaError {
    /// Requested application id is not in the catalog
    #[error("unknown application '{id}'")]
    UnknownApplication { id: String },

    /// Application entry rejected at the catalog boundary
    #[error("invalid application entry: {message}")]
    InvalidAppEntry { message: String },

    /// Neither candidate `nua-config.toml` exists
    #[error("no nua-config.toml found for '{id}' (searched: {})", join_paths(.searched))]
    ConfigNotFound { id: String, searched: Vec<PathBuf> },

    /// Config file exists but is not valid TOML
    #[error("invalid config for '{id}' in {}: {message}", .path.display())]
    ConfigParse {
        id: String,
        path: PathBuf,
        message: String,
    },

    /// Config parsed but lacks `metadata.id`
    #[error("missing 'metadata.id' in config for '{id}'")]
    MissingMetadataId { id: String },

    /// Process could not be started at all
    #[error("failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },

    /// Local or remote process returned a non-zero status
    #[error("command `{command}` {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Remote copy did not complete
    #[error("transfer of {src} to {dst} failed: {cause}")]
    TransferFailed {
        src: String,
        dst: String,
        cause: String,
    },

    /// Build of one application failed; carries the application id
    #[error("build of '{id}' failed: {source}")]
    BuildFailed {
        id: String,
        source: Box<NuaError>,
    },

    /// Settings file could not be parsed
    #[error("invalid settings in {}: {message}", .path.display())]
    InvalidSettings { path: PathBuf, message: String },

    /// Deployment document serialization error
    #[error("failed to serialize deployment document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NuaError {
    /// Stable machine-readable code (used for JSON error events)
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownApplication { .. } => "unknown_application",
            Self::InvalidAppEntry { .. } => "invalid_app_entry",
            Self::ConfigNotFound { .. } => "config_not_found",
            Self::ConfigParse { .. } => "config_parse_error",
            Self::MissingMetadataId { .. } => "missing_metadata_id",
            Self::CommandSpawn { .. } => "command_spawn_failed",
            Self::CommandFailed { .. } => "command_failed",
            Self::TransferFailed { .. } => "transfer_failed",
            Self::BuildFailed { .. } => "build_failed",
            Self::InvalidSettings { .. } => "invalid_settings",
            Self::Serialize(_) => "serialize_error",
            Self::Fs(_) => "fs_error",
            Self::Io(_) => "io_error",
        }
    }

    /// Application id this error refers to, if any
    pub fn app_id(&self) -> Option<&str> {
        match self {
            Self::UnknownApplication { id }
            | Self::ConfigNotFound { id, .. }
            | Self::ConfigParse { id, .. }
            | Self::MissingMetadataId { id }
            | Self::BuildFailed { id, .. } => Some(id),
            _ => None,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
