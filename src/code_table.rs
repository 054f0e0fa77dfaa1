//! Fixed bidirectional maps between over-the-air codes and enum variants

use log::debug;

use crate::types::Gen2Error;

/// Read-only table pairing each small integer code with one variant.
///
/// Tables are `const` data, so they exist before any caller can reach them
/// and can never be modified.
#[derive(Debug)]
pub struct CodeTable<V: 'static> {
    name: &'static str,
    entries: &'static [(u8, V)],
}

impl<V: Copy + PartialEq + 'static> CodeTable<V> {
    pub(crate) const fn new(name: &'static str, entries: &'static [(u8, V)]) -> Self {
        Self { name, entries }
    }

    /// Field name used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All `(code, variant)` pairs in code order
    pub fn entries(&self) -> &'static [(u8, V)] {
        self.entries
    }

    /// Look up the variant bound to `code`
    pub fn decode(&self, code: u8) -> Result<V, Gen2Error> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|&(_, v)| v)
            .ok_or_else(|| {
                debug!("Rejected {} code {}", self.name, code);
                Gen2Error::InvalidCode {
                    field: self.name,
                    code,
                }
            })
    }

    /// Look up the code bound to `variant`
    pub fn encode(&self, variant: V) -> Option<u8> {
        self.entries
            .iter()
            .find(|(_, v)| *v == variant)
            .map(|&(c, _)| c)
    }
}
