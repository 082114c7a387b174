//! CRC-16/CCITT-FALSE checksum used to seal BR Code payloads.
//!
//! Polynomial `0x1021`, initial register `0xFFFF`, no reflection, no final XOR.
//! The checksum covers the whole payload including the `"6304"` id and length
//! of the checksum field itself.

use crate::error::{BrCodeError, Result};

/// Id and fixed length of the checksum field.
pub const CRC_FIELD_PREFIX: &str = "6304";

const POLY: u16 = 0x1021;
const INIT: u16 = 0xFFFF;

/// Computes CRC-16/CCITT-FALSE over raw bytes.
pub fn crc16_ccitt_false(bytes: &[u8]) -> u16 {
    let mut crc = INIT;
    for &b in bytes {
        crc ^= (b as u16) << 8;
        for _ in 0..8 {
            if (crc & 0x8000) != 0 {
                crc = (crc << 1) ^ POLY;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

/// Checksum of `payload` as four uppercase hex digits.
///
/// Fails with [`BrCodeError::NonAsciiPayload`] if any character is outside
/// ASCII; the algorithm is defined over single-byte characters only.
pub fn checksum_hex(payload: &str) -> Result<String> {
    if let Some((position, ch)) = payload.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(BrCodeError::NonAsciiPayload { position, ch });
    }
    Ok(format!("{:04X}", crc16_ccitt_false(payload.as_bytes())))
}

/// Appends the checksum field to an assembled payload.
///
/// ```
/// use pix_brcode::crc::seal;
///
/// let sealed = seal("000201").unwrap();
/// assert!(sealed.starts_with("0002016304"));
/// assert_eq!(sealed.len(), 14);
/// ```
pub fn seal(payload: &str) -> Result<String> {
    let mut sealed = String::with_capacity(payload.len() + 8);
    sealed.push_str(payload);
    sealed.push_str(CRC_FIELD_PREFIX);
    let crc = checksum_hex(&sealed)?;
    sealed.push_str(&crc);
    Ok(sealed)
}

/// Returns `true` if `code` ends with a checksum field matching its content.
///
/// Hex digits are compared case-insensitively. This checks the seal only; it
/// does not parse the fields.
pub fn verify(code: &str) -> bool {
    if !code.is_ascii() || code.len() < CRC_FIELD_PREFIX.len() + 4 {
        return false;
    }
    let (body, crc) = code.split_at(code.len() - 4);
    if !body.ends_with(CRC_FIELD_PREFIX) {
        return false;
    }
    match checksum_hex(body) {
        Ok(expected) => expected.eq_ignore_ascii_case(crc),
        Err(_) => false,
    }
}
