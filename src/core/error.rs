//! Error types for data loading.

use thiserror::Error;

/// Errors that can occur when loading scene tuning or character data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A clip definition cannot be played.
    #[error("Invalid clip {clip} in '{character}': {reason}")]
    InvalidClip {
        character: String,
        clip: String,
        reason: String,
    },

    /// A character definition lacks a clip the scene needs.
    #[error("Character '{character}' has no {clip} clip")]
    MissingClip { character: String, clip: String },
}
