//! Shared types for Gen2 tag data

use std::fmt;

use thiserror::Error;

/// Protocol identifier string carried by every Gen2 tag
pub const PROTOCOL_TAG: &str = "GEN2";

/// Air protocol a tag was read with
///
/// Host software that handles several tag families uses this to tell them
/// apart. Only Gen2 is modelled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TagProtocol {
    Gen2,
}

impl TagProtocol {
    pub fn as_str(self) -> &'static str {
        match self {
            TagProtocol::Gen2 => PROTOCOL_TAG,
        }
    }
}

impl fmt::Display for TagProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while building or decoding Gen2 values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Gen2Error {
    /// A byte field has a length the protocol does not allow
    #[error("Invalid {field} length: {len} bytes")]
    InvalidLength { field: &'static str, len: usize },
    /// An over-the-air code has no matching variant
    #[error("Invalid Gen2 {field} code: {code}")]
    InvalidCode { field: &'static str, code: u8 },
    /// Text input could not be parsed as hex
    #[error("Malformed hex string: {0:?}")]
    MalformedText(String),
    /// A numeric value lies outside its protocol range
    #[error("{field} out of range: {value} (maximum: {max})")]
    OutOfRange { field: &'static str, value: u8, max: u8 },
}

/// Convert bytes to uppercase hex string
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

/// Parse a hex string into bytes. A leading `0x` or `0X` is ignored.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, Gen2Error> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    if digits.len() % 2 != 0 {
        return Err(Gen2Error::MalformedText(hex.to_string()));
    }

    let nibble = |c: u8| {
        (c as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or_else(|| Gen2Error::MalformedText(hex.to_string()))
    };

    digits
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| -> Result<u8, Gen2Error> { Ok((nibble(pair[0])? << 4) | nibble(pair[1])?) })
        .collect()
}
