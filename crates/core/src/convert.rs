//! Decoding pipeline and file conversion.
//!
//! Everything up to the output path is computed in memory first; the output
//! file is only opened once the literal has decoded cleanly.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::encode::{encode_bytes, strip_sentinel};
use crate::error::{CtodataError, Result};
use crate::literal::{extract_literal, parse_values};
use crate::types::{ConversionReport, DecodeOptions};

/// Suffix appended to the input path to name the output file.
pub const OUTPUT_SUFFIX: &str = ".ctodata";

/// Decode the trailing array literal of `text` into bytes.
///
/// # Examples
///
/// ```
/// use ctodata_core::{decode_str, DecodeOptions};
///
/// let bytes = decode_str("int data[4] = {10, 32, 0, 255};", DecodeOptions::default()).unwrap();
/// assert_eq!(bytes, [0x0A, 0x20, 0x00, 0xFF]);
/// ```
pub fn decode_str(text: &str, options: DecodeOptions) -> Result<Vec<u8>> {
    let literal = extract_literal(text);
    tracing::trace!("literal spans {} of {} bytes", literal.len(), text.len());

    let mut values = parse_values(literal)?;
    tracing::debug!("parsed {} values", values.len());

    if options.strip_byte {
        strip_sentinel(&mut values)?;
        tracing::debug!("stripped trailing sentinel byte");
    }

    encode_bytes(&values)
}

/// Derive the output path by appending [`OUTPUT_SUFFIX`] to `input`.
///
/// The suffix is appended to the raw path; an existing extension is kept.
#[must_use]
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Bytes decoded from an input file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub bytes: Vec<u8>,
}

impl DecodedFile {
    /// Create or truncate the output file and write the bytes to it.
    pub fn write(&self) -> Result<ConversionReport> {
        let write_err = |source| CtodataError::WriteOutput {
            path: self.output.clone(),
            source,
        };

        let mut file = fs::File::create(&self.output).map_err(write_err)?;
        file.write_all(&self.bytes).map_err(write_err)?;
        file.flush().map_err(write_err)?;

        tracing::debug!(
            "wrote {} bytes to {}",
            self.bytes.len(),
            self.output.display()
        );

        Ok(ConversionReport {
            input: self.input.clone(),
            output: self.output.clone(),
            bytes_written: self.bytes.len(),
        })
    }
}

/// Read `input` and decode its literal without touching the filesystem
/// any further.
pub fn decode_file(input: &Path, options: DecodeOptions) -> Result<DecodedFile> {
    let text = fs::read_to_string(input).map_err(|source| CtodataError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", text.len(), input.display());

    let bytes = decode_str(&text, options)?;

    Ok(DecodedFile {
        input: input.to_path_buf(),
        output: output_path(input),
        bytes,
    })
}
