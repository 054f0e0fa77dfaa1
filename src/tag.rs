//! Gen2 tag identity: EPC, CRC and Protocol-Control word

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::trace;

use crate::types::{bytes_to_hex, hex_to_bytes, Gen2Error, TagProtocol};

/// Longest EPC a Gen2 tag can carry, in bytes
pub const MAX_EPC_BYTES: usize = 62;

/// Identity of a Gen2 tag
///
/// Built once per detection and never modified. Every accessor returns an
/// owned copy of the stored bytes.
///
/// Two identifiers compare equal when their EPCs match, whatever their CRC
/// or PC words.
#[derive(Debug, Clone)]
pub struct TagIdentifier {
    epc: Vec<u8>,
    crc: Option<[u8; 2]>,
    pc: [u8; 2],
}

impl TagIdentifier {
    /// Create an identifier from EPC bytes, deriving the PC word
    ///
    /// The derived PC is `[(len << 3) & 0xFF, 0]` where `len` is the EPC
    /// length in bytes.
    ///
    /// # Errors
    /// Returns [`Gen2Error::InvalidLength`] if the EPC length is odd or
    /// exceeds [`MAX_EPC_BYTES`].
    pub fn new(epc: &[u8]) -> Result<Self, Gen2Error> {
        Self::build(epc, None, None)
    }

    /// Create an identifier with an explicit PC word, stored as given
    pub fn with_pc(epc: &[u8], pc: [u8; 2]) -> Result<Self, Gen2Error> {
        Self::build(epc, None, Some(pc))
    }

    /// Create an identifier with explicit CRC and PC words, stored as given
    pub fn with_crc_and_pc(epc: &[u8], crc: [u8; 2], pc: [u8; 2]) -> Result<Self, Gen2Error> {
        Self::build(epc, Some(crc), Some(pc))
    }

    /// Create an identifier from a hex EPC string, deriving the PC word
    ///
    /// # Errors
    /// Returns [`Gen2Error::MalformedText`] if the string is not hex, then
    /// the same length errors as [`TagIdentifier::new`].
    pub fn from_hex(epc: &str) -> Result<Self, Gen2Error> {
        Self::new(&hex_to_bytes(epc)?)
    }

    /// Create an identifier from hex EPC and CRC strings, deriving the PC word
    ///
    /// The CRC must decode to exactly two bytes.
    pub fn from_hex_with_crc(epc: &str, crc: &str) -> Result<Self, Gen2Error> {
        let epc = hex_to_bytes(epc)?;
        let crc_bytes = hex_to_bytes(crc)?;
        let crc: [u8; 2] = crc_bytes
            .as_slice()
            .try_into()
            .map_err(|_| Gen2Error::InvalidLength {
                field: "CRC",
                len: crc_bytes.len(),
            })?;
        Self::build(&epc, Some(crc), None)
    }

    fn build(epc: &[u8], crc: Option<[u8; 2]>, pc: Option<[u8; 2]>) -> Result<Self, Gen2Error> {
        if !Self::check_len(epc.len()) {
            return Err(Gen2Error::InvalidLength {
                field: "EPC",
                len: epc.len(),
            });
        }

        let pc = pc.unwrap_or_else(|| Self::derive_pc(epc.len()));
        trace!("Gen2 tag EPC {} PC {:02X?}", bytes_to_hex(epc), pc);

        Ok(Self {
            epc: epc.to_vec(),
            crc,
            pc,
        })
    }

    fn check_len(epc_bytes: usize) -> bool {
        epc_bytes <= MAX_EPC_BYTES && epc_bytes % 2 == 0
    }

    // Byte count shifted into the top bits, not the word count Gen2 defines.
    fn derive_pc(epc_bytes: usize) -> [u8; 2] {
        [((epc_bytes << 3) & 0xFF) as u8, 0]
    }

    /// Air protocol of this tag, always [`TagProtocol::Gen2`]
    pub fn protocol(&self) -> TagProtocol {
        TagProtocol::Gen2
    }

    /// Protocol identifier string, always `"GEN2"`
    pub fn protocol_tag(&self) -> &'static str {
        self.protocol().as_str()
    }

    pub fn epc_bytes(&self) -> Vec<u8> {
        self.epc.clone()
    }

    /// EPC as uppercase hex
    pub fn epc_hex(&self) -> String {
        bytes_to_hex(&self.epc)
    }

    pub fn epc_len(&self) -> usize {
        self.epc.len()
    }

    /// CRC, if one was supplied at construction
    pub fn crc_bytes(&self) -> Option<[u8; 2]> {
        self.crc
    }

    pub fn pc_bytes(&self) -> [u8; 2] {
        self.pc
    }

    /// `"GEN2:"` followed by the EPC in uppercase hex
    pub fn render(&self) -> String {
        format!("{}:{}", self.protocol_tag(), self.epc_hex())
    }
}

impl PartialEq for TagIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.epc == other.epc
    }
}

impl Eq for TagIdentifier {}

impl Hash for TagIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epc.hash(state);
    }
}

impl fmt::Display for TagIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for TagIdentifier {
    type Err = Gen2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
