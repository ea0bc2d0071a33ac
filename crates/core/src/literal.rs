//! Locating and tokenizing the brace-delimited array literal.
//!
//! This is plain string splitting, not a C parser. The literal is whatever
//! follows the last `{` in the text, up to the first `}` after it. Nested
//! initializers and braces inside comments or strings are not handled.

use crate::error::{CtodataError, Result};

/// Select the text of the trailing array initializer.
///
/// Takes the segment after the last `{` (the whole text if there is none)
/// and cuts it at the first `}`.
///
/// # Examples
///
/// ```
/// use ctodata_core::extract_literal;
///
/// let text = "/* {} */ const char data[3] = {1, 2, 3};";
/// assert_eq!(extract_literal(text), "1, 2, 3");
/// ```
#[must_use]
pub fn extract_literal(text: &str) -> &str {
    let tail = text.rsplit('{').next().unwrap_or(text);
    tail.split('}').next().unwrap_or(tail)
}

/// Parse a comma and/or whitespace separated list of decimal integers.
///
/// Order is preserved. Tokens may carry a leading `+` or `-`; anything
/// else that is not a decimal digit makes the whole literal invalid.
pub fn parse_values(literal: &str) -> Result<Vec<i128>> {
    let normalized = literal.replace(',', " ");

    normalized
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<i128> {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);

    // `i128::from_str` accepts the sign, but reject things like "+" or "--1"
    // before asking it so the error names the token rather than overflow.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CtodataError::InvalidToken {
            token: token.to_string(),
            position,
        });
    }

    token.parse::<i128>().map_err(|_| {
        // Only overflow is left: a huge literal is a range problem.
        let value = if token.starts_with('-') {
            i128::MIN
        } else {
            i128::MAX
        };
        CtodataError::OutOfRange { value, position }
    })
}
