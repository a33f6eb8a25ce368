//! Minimal big-endian parsing helpers.
//!
//! These helpers are used for selector extraction and for walking the ABI words of an encoded
//! execute call. Every read is bounds-checked; callers decide what a failed read means.

use stylus_sdk::alloy_primitives::{FixedBytes, U256};

use crate::errors::DecodeError;

/// Read the leading 4 bytes of a payload as a function selector.
///
/// Returns `None` when the payload is shorter than 4 bytes; a payload with no selector never
/// matches any allow-listed selector, including the zero selector.
pub fn selector_of(data: &[u8]) -> Option<FixedBytes<4>> {
    if data.len() < 4 {
        return None;
    }
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&data[..4]);
    Some(FixedBytes(buf))
}

/// Read the 32-byte word at `pos`.
pub fn read_word(bytes: &[u8], pos: usize) -> Result<&[u8], DecodeError> {
    if pos > bytes.len() || bytes.len() - pos < 32 {
        return Err(DecodeError::Truncated);
    }
    Ok(&bytes[pos..pos + 32])
}

/// Read the word at `pos` as a `bytes32`.
pub fn read_b32(bytes: &[u8], pos: usize) -> Result<FixedBytes<32>, DecodeError> {
    let word = read_word(bytes, pos)?;
    let mut buf = [0u8; 32];
    buf.copy_from_slice(word);
    Ok(FixedBytes(buf))
}

/// Read the word at `pos` as a `uint256`.
pub fn read_u256(bytes: &[u8], pos: usize) -> Result<U256, DecodeError> {
    Ok(U256::from_be_slice(read_word(bytes, pos)?))
}

/// Read the word at `pos` as a byte offset or length, bounded by the payload size.
///
/// Any value that cannot index into `bytes` is rejected outright, so later arithmetic on the
/// returned value cannot overflow `usize`.
pub fn read_usize(bytes: &[u8], pos: usize) -> Result<usize, DecodeError> {
    let value = read_u256(bytes, pos)?;
    if value > U256::from(bytes.len()) {
        return Err(DecodeError::OutOfBounds);
    }
    Ok(value.to::<u64>() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_of_reads_leading_four_bytes() {
        let data = [0xAA, 0xBB, 0xCC, 0xDD, 0x01, 0x02];
        assert_eq!(
            selector_of(&data),
            Some(FixedBytes([0xAA, 0xBB, 0xCC, 0xDD]))
        );
    }

    #[test]
    fn selector_of_rejects_short_payloads() {
        assert_eq!(selector_of(&[]), None);
        assert_eq!(selector_of(&[0xAA, 0xBB, 0xCC]), None);
    }

    #[test]
    fn word_reads_are_bounds_checked() {
        let buf = [0u8; 40];
        assert!(read_word(&buf, 8).is_ok());
        assert_eq!(read_word(&buf, 9), Err(DecodeError::Truncated));
        assert_eq!(read_word(&buf, usize::MAX), Err(DecodeError::Truncated));
    }

    #[test]
    fn read_usize_rejects_oversized_words() {
        let mut buf = [0u8; 32];
        buf[0] = 0xFF;
        assert_eq!(read_usize(&buf, 0), Err(DecodeError::OutOfBounds));

        let mut small = [0u8; 32];
        small[31] = 16;
        assert_eq!(read_usize(&small, 0), Ok(16));
    }
}
