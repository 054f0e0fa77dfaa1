//! EPC Gen2 tag identity and per-read protocol parameters.
//!
//! This crate holds the value types a UHF RFID host builds while consuming
//! tag reads from a reader: the tag identifier (EPC, CRC, PC word) and the
//! Gen2 parameters a tag was read with (target, Q algorithm, link frequency),
//! along with the over-the-air codes those parameters map to.
//!
//! Nothing here performs I/O. A response parser sitting on top of a reader
//! transport constructs these values.
//!
//! # Example
//!
//! ```
//! use gen2_tag::{LinkFrequencySetting, MetadataFlags, TagIdentifier, TagReadRecord};
//!
//! let tag = TagIdentifier::from_hex("E20068160000006012345678")?;
//! assert_eq!(tag.to_string(), "GEN2:E20068160000006012345678");
//!
//! let read = TagReadRecord::decode_gen2(MetadataFlags::GEN2_LF, &[0x02])?;
//! assert_eq!(read.link_frequency(), Some(LinkFrequencySetting::Link320Khz));
//! # Ok::<(), gen2_tag::Gen2Error>(())
//! ```

mod code_table;
mod gen2;
mod read;
mod tag;
mod types;

// Re-exports
pub use code_table::CodeTable;
pub use gen2::{
    InitialQ, LINK_FREQUENCY_CODES, LinkFrequencySetting, QAlgorithm, TARGET_CODES,
    TargetAlgorithm,
};
pub use read::{MetadataFlags, TagReadRecord};
pub use tag::{MAX_EPC_BYTES, TagIdentifier};
pub use types::{Gen2Error, PROTOCOL_TAG, TagProtocol};
