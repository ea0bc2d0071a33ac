//! Turning parsed integers into raw bytes.

use crate::error::{CtodataError, Result};

/// Remove the trailing zero that string data carries.
///
/// Fails if the list is empty or its last value is not zero; in both cases
/// `values` is left untouched.
pub fn strip_sentinel(values: &mut Vec<i128>) -> Result<()> {
    match values.last() {
        None => Err(CtodataError::MissingSentinel),
        Some(&0) => {
            values.pop();
            Ok(())
        }
        Some(&found) => Err(CtodataError::NonZeroSentinel { found }),
    }
}

/// Convert each value to a byte, in order.
///
/// Conversion is strict: every value must already be in `0..=255`.
pub fn encode_bytes(values: &[i128]) -> Result<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            u8::try_from(value).map_err(|_| CtodataError::OutOfRange { value, position })
        })
        .collect()
}
