//! Error types for eogtricks

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for eogtricks
#[derive(Debug, Error)]
pub enum EogtricksError {
    #[error("Not an eogtricks directory: {0}")]
    NotInitialized(PathBuf),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is not writable: {0}")]
    NotWritable(PathBuf),

    #[error("Destination already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Missing {0} command")]
    MissingAction(String),

    #[error("Missing widget: {0}")]
    MissingWidget(String),

    #[error("No quick move target folder configured")]
    NoQuickMoveTarget,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EogtricksError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EogtricksError::NotInitialized(_) => 2,
            EogtricksError::FileNotFound(_) => 3,
            EogtricksError::AlreadyExists(_) => 4,
            EogtricksError::NoQuickMoveTarget => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EogtricksError::NotInitialized(path) => {
                format!(
                    "Not an eogtricks directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'eogtricks init' in this directory to create a config\n\
                    • Navigate to a directory below an existing config\n\
                    • Set EOGTRICKS_ROOT environment variable to the config directory",
                    path.display()
                )
            }
            EogtricksError::AlreadyExists(path) => {
                format!(
                    "Destination already exists: {}\n\n\
                    Suggestions:\n\
                    • Edit the tags so the new name is unique\n\
                    • Move or rename the existing file first",
                    path.display()
                )
            }
            EogtricksError::NotWritable(path) => {
                format!(
                    "File is not writable: {}\n\n\
                    Suggestions:\n\
                    • Check the permissions of the file and its directory",
                    path.display()
                )
            }
            EogtricksError::NoQuickMoveTarget => "No quick move target folder configured\n\n\
                Suggestions:\n\
                • Pass a folder: eogtricks move <FILE> --to <DIR>\n\
                • Configure one: eogtricks config quick_move_target <DIR>"
                .to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type using EogtricksError
pub type Result<T> = std::result::Result<T, EogtricksError>;
