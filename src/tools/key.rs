use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::AmcError;

/// The unique bytes of a key, in the order they first appear.
///
/// Earlier bytes get the cheaper slots in the group table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PriorityAlphabet {
    bytes: Vec<u8>,
}

impl PriorityAlphabet {
    /// Keep the first occurrence of each byte, drop later repeats.
    pub fn from_raw(raw: &[u8]) -> Self {
        let mut seen = [false; 256];
        let bytes = raw
            .iter()
            .copied()
            .filter(|&b| !std::mem::replace(&mut seen[b as usize], true))
            .collect();
        Self { bytes }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Decode a base64 key into its raw bytes. ASCII whitespace anywhere in the key is
/// ignored, so line-wrapped keys work. The empty key decodes to no bytes.
pub fn decode_key(key: &str) -> Result<Vec<u8>, AmcError> {
    let packed: Vec<u8> = key.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(packed)?)
}

/// The base64 form of raw key bytes.
pub fn encode_key(raw: &[u8]) -> String {
    STANDARD.encode(raw)
}

/// Decode and deduplicate a key.
pub fn normalize(key: &str) -> Result<PriorityAlphabet, AmcError> {
    decode_key(key).map(|raw| PriorityAlphabet::from_raw(&raw))
}
