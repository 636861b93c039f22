//! Error Types
//!
//! Only startup can fail. Once the [`Companion`](crate::Companion) is running,
//! every operation works on in-memory state; missing content is reported to
//! the user as a chat message, not as an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the asset collaborator
#[derive(Debug, Error)]
pub enum AssetError {
    /// The logical path does not exist under the asset root
    #[error("Asset not found: {path}")]
    NotFound {
        /// The resolved path that was attempted
        path: PathBuf,
    },

    /// The asset exists but could not be read
    #[error("Failed to read asset at {path}: {source}")]
    Read {
        /// The resolved path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Errors when loading or bootstrapping configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory could be determined for this user
    #[error("Could not resolve a config directory (set WAIFU_CONFIG_DIR)")]
    NoConfigDir,

    /// Failed to create the config directory or a default file
    #[error("Failed to write config file at {path}: {source}")]
    WriteError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to read a config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse JSON
    #[error("Failed to parse config file at {path}: {source}")]
    ParseError {
        /// The path that was parsed
        path: PathBuf,
        /// The underlying JSON error
        source: serde_json::Error,
    },
}

/// Fatal errors that abort the process before the surface is shown
#[derive(Debug, Error)]
pub enum StartupError {
    /// A required asset is missing or unreadable
    #[error("Could not load required asset: {0}")]
    Asset(#[from] AssetError),

    /// The clothing catalog directory is missing or unreadable
    #[error("Failed to scan clothes at {path}: {source}")]
    Clothes {
        /// The clothing catalog root
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// The action queue has been closed (the consumer is shutting down)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Action queue closed")]
pub struct QueueClosed;
