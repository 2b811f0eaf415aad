//! Error types for hinge.

use std::io;

/// Errors produced by the hinge platform layer.
#[derive(Debug, thiserror::Error)]
pub enum HingeError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("keyboard error: {0}")]
    Keyboard(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HingeError>;
