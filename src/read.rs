//! Per-read Gen2 parameters

use log::debug;

use crate::gen2::{InitialQ, LinkFrequencySetting, QAlgorithm, TargetAlgorithm};
use crate::types::Gen2Error;

/// Bitmask of metadata items a reader attaches to a tag read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MetadataFlags(u16);

bitflags::bitflags! {
    impl MetadataFlags: u16 {
        const READ_COUNT  = 0x0001;
        const RSSI        = 0x0002;
        const ANTENNA_ID  = 0x0004;
        const FREQUENCY   = 0x0008;
        const TIMESTAMP   = 0x0010;
        const PHASE       = 0x0020;
        const PROTOCOL    = 0x0040;
        const DATA        = 0x0080;
        const GPIO_STATUS = 0x0100;
        const GEN2_Q      = 0x0200;
        const GEN2_LF     = 0x0400;
        const GEN2_TARGET = 0x0800;
    }
}

impl MetadataFlags {
    /// Flags covered by the Gen2 trailer, in wire order
    pub const GEN2: [MetadataFlags; 3] = [Self::GEN2_Q, Self::GEN2_LF, Self::GEN2_TARGET];
}

/// Gen2 parameters a single tag was read with
///
/// `target` and `lf` stay `None` until the reader reports them. A fresh
/// record holds a static Q of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TagReadRecord {
    q: QAlgorithm,
    target: Option<TargetAlgorithm>,
    lf: Option<LinkFrequencySetting>,
}

impl TagReadRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_q(self, q: QAlgorithm) -> Self {
        Self { q, ..self }
    }

    pub fn with_target(self, target: TargetAlgorithm) -> Self {
        Self {
            target: Some(target),
            ..self
        }
    }

    pub fn with_link_frequency(self, lf: LinkFrequencySetting) -> Self {
        Self {
            lf: Some(lf),
            ..self
        }
    }

    /// Decode the Gen2 metadata trailer of a tag read
    ///
    /// `data` holds one byte for each Gen2 flag set in `flags`, in the order
    /// Q, link frequency, target. The Q byte is a static initial Q. Flags
    /// outside the Gen2 group are ignored.
    ///
    /// # Errors
    /// - [`Gen2Error::InvalidLength`] if `data` does not hold exactly one byte per Gen2 flag
    /// - [`Gen2Error::OutOfRange`] if the Q byte exceeds 15
    /// - [`Gen2Error::InvalidCode`] for an unknown link frequency or target code
    pub fn decode_gen2(flags: MetadataFlags, data: &[u8]) -> Result<Self, Gen2Error> {
        let expected = MetadataFlags::GEN2
            .iter()
            .filter(|flag| flags.contains(**flag))
            .count();
        if data.len() != expected {
            return Err(Gen2Error::InvalidLength {
                field: "Gen2 metadata",
                len: data.len(),
            });
        }

        let mut bytes = data.iter().copied();
        let mut record = Self::new();

        if flags.contains(MetadataFlags::GEN2_Q) {
            if let Some(q) = bytes.next() {
                record = record.with_q(QAlgorithm::Static(InitialQ::new(q)?));
            }
        }
        if flags.contains(MetadataFlags::GEN2_LF) {
            if let Some(code) = bytes.next() {
                record = record.with_link_frequency(LinkFrequencySetting::from_code(code)?);
            }
        }
        if flags.contains(MetadataFlags::GEN2_TARGET) {
            if let Some(code) = bytes.next() {
                record = record.with_target(TargetAlgorithm::from_code(code)?);
            }
        }

        debug!(
            "Gen2 metadata {:02X?}: q={} lf={:?} target={:?}",
            data, record.q, record.lf, record.target
        );
        Ok(record)
    }

    pub fn q(&self) -> QAlgorithm {
        self.q
    }

    pub fn target(&self) -> Option<TargetAlgorithm> {
        self.target
    }

    pub fn link_frequency(&self) -> Option<LinkFrequencySetting> {
        self.lf
    }
}
