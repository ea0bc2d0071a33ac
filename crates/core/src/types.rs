//! Core types for ctodata.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options that change how a literal is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Require a trailing `0` and drop it before encoding.
    ///
    /// Converters that emit string data as a C array append a
    /// terminating zero which is not part of the payload.
    #[serde(default)]
    pub strip_byte: bool,
}

impl DecodeOptions {
    #[must_use]
    pub fn strip_byte(mut self, strip_byte: bool) -> Self {
        self.strip_byte = strip_byte;
        self
    }
}

/// Outcome of a completed conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes_written: usize,
}
