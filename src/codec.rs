//! Naive text to integer encoding.
//!
//! Every character becomes its decimal code point, codes are joined with
//! [`SEPARATOR`] and the resulting digit string is read as one integer. This
//! gives the transform something to work on and nothing more: it is not a
//! padding scheme and adds no security.
//!
//! Only code points in [`MIN_CODE`]..=[`MAX_CODE`] are accepted. None of them
//! has a leading zero and none ends in more than two zeros, so the separator
//! can neither appear inside a code nor straddle the end of one. That argument
//! only covers this range, which is why the tests walk every code pair.
use log::trace;
use num::{BigUint, Zero};
use crate::error::{Result, RsaError};

pub const SEPARATOR: &str = "001";

pub const MIN_CODE: u32 = 10;
pub const MAX_CODE: u32 = 999;

/// Encodes `message` as a single integer. The empty message encodes to 0.
pub fn encode(message: &str) -> Result<BigUint> {
    if message.is_empty() {
        return Ok(BigUint::ZERO)
    }
    let digits = join_codes(message)?;
    trace!("Encoded digits: {}", digits);
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| RsaError::Unexpected(format!("could not parse encoded digits {}", digits)))
}

/// Inverse of [`encode`]. Only integers produced by `encode` (or recovered by
/// decryption) are meaningful input, anything else is reported as malformed.
pub fn decode(encoded: &BigUint) -> Result<String> {
    if encoded.is_zero() {
        return Ok(String::new())
    }
    split_codes(&encoded.to_str_radix(10))
}

pub(crate) fn join_codes(message: &str) -> Result<String> {
    message
        .chars()
        .map(|c| {
            let code = c as u32;
            if (MIN_CODE..=MAX_CODE).contains(&code) {
                Ok(code.to_string())
            }
            else {
                Err(RsaError::UnsupportedCharacter(c))
            }
        })
        .collect::<Result<Vec<String>>>()
        .map(|codes| codes.join(SEPARATOR))
}

pub(crate) fn split_codes(digits: &str) -> Result<String> {
    digits
        .split(SEPARATOR)
        .map(|segment| {
            Some(segment)
                .filter(|s| !s.starts_with('0'))
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|code| (MIN_CODE..=MAX_CODE).contains(code))
                .and_then(char::from_u32)
                .ok_or_else(|| RsaError::MalformedEncoding(format!("segment {:?} is not a character code", segment)))
        })
        .collect()
}
