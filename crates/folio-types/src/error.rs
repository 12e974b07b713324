//! Error types for folio.

use std::io;

/// Errors produced by folio.
///
/// The first four variants are the interpreter's user-facing failures; their
/// `Display` text is exactly the line appended to the terminal output.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Not a directory")]
    NotADirectory,

    #[error("Directory not found")]
    DirectoryNotFound,

    #[error("File not found")]
    FileNotFound,

    #[error("Command not found")]
    CommandNotFound,

    #[error("duplicate entry in directory: {0}")]
    DuplicateEntry(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
