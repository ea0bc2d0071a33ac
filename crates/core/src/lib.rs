//! ctodata Core
//!
//! Turn the brace-delimited integer array at the end of a C source file
//! (e.g. `const char data[] = {137, 80, 78, 71, ...};`) back into the raw
//! bytes it encodes, and write them next to the source as `<file>.ctodata`.
//!
//! # Quick Start
//!
//! ```
//! use ctodata_core::Ctodata;
//!
//! let ctodata = Ctodata::new();
//! let bytes = ctodata.decode_str("int data[4] = {10, 32, 0, 255};").unwrap();
//! assert_eq!(bytes, [0x0A, 0x20, 0x00, 0xFF]);
//! ```
//!
//! # Stripping the Sentinel Byte
//!
//! ```
//! use ctodata_core::{Ctodata, DecodeOptions};
//!
//! let ctodata = Ctodata::with_options(DecodeOptions::default().strip_byte(true));
//! assert_eq!(ctodata.decode_str("{1, 2, 3, 0}").unwrap(), [1, 2, 3]);
//! assert!(ctodata.decode_str("{1, 2, 3}").is_err());
//! ```

pub mod convert;
pub mod encode;
pub mod error;
pub mod hexdump;
pub mod literal;
pub mod types;

use std::path::Path;

pub use convert::{decode_file, decode_str, output_path, DecodedFile, OUTPUT_SUFFIX};
pub use encode::{encode_bytes, strip_sentinel};
pub use error::{CtodataError, Result};
pub use hexdump::hexdump;
pub use literal::{extract_literal, parse_values};
pub use types::*;

/// Main entry point - a configured converter instance.
#[derive(Debug, Clone, Default)]
pub struct Ctodata {
    options: DecodeOptions,
}

impl Ctodata {
    /// Create a converter with default options (no sentinel stripping).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options.
    #[must_use]
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    #[must_use]
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode the trailing array literal of `text`.
    pub fn decode_str(&self, text: &str) -> Result<Vec<u8>> {
        decode_str(text, self.options)
    }

    /// Read and decode `input`. Nothing is written yet.
    pub fn decode_file(&self, input: impl AsRef<Path>) -> Result<DecodedFile> {
        decode_file(input.as_ref(), self.options)
    }

    /// Read, decode and write `<input>.ctodata` in one step.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ctodata_core::Ctodata;
    ///
    /// let report = Ctodata::new().convert_file("splash.png.c")?;
    /// println!("{} -> {} bytes", report.output.display(), report.bytes_written);
    /// # Ok::<(), ctodata_core::CtodataError>(())
    /// ```
    pub fn convert_file(&self, input: impl AsRef<Path>) -> Result<ConversionReport> {
        self.decode_file(input)?.write()
    }
}
