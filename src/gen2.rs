//! Gen2 inventory parameters reported with each tag read

use std::fmt;
use std::str::FromStr;

use crate::code_table::CodeTable;
use crate::types::Gen2Error;

/// Inventory search target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetAlgorithm {
    /// Search target A until exhausted, then search target B
    AB,
    /// Search target B until exhausted, then search target A
    BA,
    /// Search target A
    A,
    /// Search target B
    B,
}

/// Air protocol codes for [`TargetAlgorithm`]
pub static TARGET_CODES: CodeTable<TargetAlgorithm> = CodeTable::new(
    "target",
    &[
        (0, TargetAlgorithm::AB),
        (1, TargetAlgorithm::BA),
        (2, TargetAlgorithm::A),
        (3, TargetAlgorithm::B),
    ],
);

impl TargetAlgorithm {
    /// Decode an over-the-air target code
    pub fn from_code(code: u8) -> Result<Self, Gen2Error> {
        TARGET_CODES.decode(code)
    }

    /// Over-the-air target code
    pub fn code(self) -> u8 {
        match self {
            TargetAlgorithm::AB => 0,
            TargetAlgorithm::BA => 1,
            TargetAlgorithm::A => 2,
            TargetAlgorithm::B => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TargetAlgorithm::AB => "AB",
            TargetAlgorithm::BA => "BA",
            TargetAlgorithm::A => "A",
            TargetAlgorithm::B => "B",
        }
    }
}

impl TryFrom<u8> for TargetAlgorithm {
    type Error = Gen2Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<TargetAlgorithm> for u8 {
    fn from(target: TargetAlgorithm) -> u8 {
        target.code()
    }
}

impl fmt::Display for TargetAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetAlgorithm {
    type Err = Gen2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AB" => Ok(TargetAlgorithm::AB),
            "BA" => Ok(TargetAlgorithm::BA),
            "A" => Ok(TargetAlgorithm::A),
            "B" => Ok(TargetAlgorithm::B),
            _ => Err(Gen2Error::MalformedText(s.to_string())),
        }
    }
}

/// Backscatter link frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFrequencySetting {
    Link250Khz,
    Link320Khz,
    Link640Khz,
}

/// Air protocol codes for [`LinkFrequencySetting`]. Codes 1 and 3 are reserved.
pub static LINK_FREQUENCY_CODES: CodeTable<LinkFrequencySetting> = CodeTable::new(
    "link frequency",
    &[
        (0, LinkFrequencySetting::Link250Khz),
        (2, LinkFrequencySetting::Link320Khz),
        (4, LinkFrequencySetting::Link640Khz),
    ],
);

impl LinkFrequencySetting {
    /// Decode an over-the-air link frequency code
    pub fn from_code(code: u8) -> Result<Self, Gen2Error> {
        LINK_FREQUENCY_CODES.decode(code)
    }

    /// Over-the-air link frequency code
    pub fn code(self) -> u8 {
        match self {
            LinkFrequencySetting::Link250Khz => 0,
            LinkFrequencySetting::Link320Khz => 2,
            LinkFrequencySetting::Link640Khz => 4,
        }
    }

    /// Link frequency in kHz
    pub fn khz(self) -> u16 {
        match self {
            LinkFrequencySetting::Link250Khz => 250,
            LinkFrequencySetting::Link320Khz => 320,
            LinkFrequencySetting::Link640Khz => 640,
        }
    }
}

impl TryFrom<u8> for LinkFrequencySetting {
    type Error = Gen2Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<LinkFrequencySetting> for u8 {
    fn from(lf: LinkFrequencySetting) -> u8 {
        lf.code()
    }
}

impl fmt::Display for LinkFrequencySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kHz", self.khz())
    }
}

/// Initial slot-count exponent for a static Q algorithm, always in `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct InitialQ(u8);

impl InitialQ {
    pub const MAX: u8 = 15;

    pub fn new(q: u8) -> Result<Self, Gen2Error> {
        if q > Self::MAX {
            return Err(Gen2Error::OutOfRange {
                field: "Initial Q",
                value: q,
                max: Self::MAX,
            });
        }
        Ok(Self(q))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for InitialQ {
    type Error = Gen2Error;

    fn try_from(q: u8) -> Result<Self, Self::Error> {
        Self::new(q)
    }
}

impl fmt::Display for InitialQ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot-count (Q) algorithm used for an inventory round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QAlgorithm {
    /// Reader firmware adapts Q at runtime
    Dynamic,
    /// Fixed initial Q
    Static(InitialQ),
}

impl QAlgorithm {
    /// Static Q with the given initial value
    ///
    /// # Errors
    /// Returns [`Gen2Error::OutOfRange`] if `initial_q` exceeds 15.
    pub fn fixed(initial_q: u8) -> Result<Self, Gen2Error> {
        InitialQ::new(initial_q).map(QAlgorithm::Static)
    }

    /// Initial Q of a static algorithm, `None` for dynamic
    pub fn initial_q(&self) -> Option<u8> {
        match self {
            QAlgorithm::Dynamic => None,
            QAlgorithm::Static(q) => Some(q.get()),
        }
    }

    /// Reader Q-type field: 0 = dynamic, 1 = static
    pub fn type_code(&self) -> u8 {
        match self {
            QAlgorithm::Dynamic => 0,
            QAlgorithm::Static(_) => 1,
        }
    }
}

impl Default for QAlgorithm {
    fn default() -> Self {
        QAlgorithm::Static(InitialQ::default())
    }
}

impl fmt::Display for QAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QAlgorithm::Dynamic => f.write_str("DynamicQ"),
            QAlgorithm::Static(q) => write!(f, "{}", q),
        }
    }
}
