//! Error type for decoding and conversion.

use std::path::PathBuf;

/// Errors that can occur while turning a C array literal into a data file.
#[derive(Debug, thiserror::Error)]
pub enum CtodataError {
    /// Input file could not be read (missing, unreadable or not UTF-8).
    #[error("unable to open input {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written.
    #[error("unable to open output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token inside the literal is not a decimal integer.
    #[error("invalid integer literal '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    /// A value does not fit in a single byte.
    #[error("value {value} at position {position} is not in byte range 0..=255")]
    OutOfRange { value: i128, position: usize },

    /// Sentinel stripping was requested but the last value is not zero.
    #[error("expected trailing sentinel byte 0, found {found}")]
    NonZeroSentinel { found: i128 },

    /// Sentinel stripping was requested on an empty literal.
    #[error("expected trailing sentinel byte 0, but the array literal is empty")]
    MissingSentinel,
}

impl CtodataError {
    /// Whether the error comes from the filesystem rather than the literal itself.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::ReadInput { .. } | Self::WriteOutput { .. })
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CtodataError>;
