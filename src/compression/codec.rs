use log::info;

use super::compress::{compress, structured_bits};
use super::decompress::decompress;
use crate::error::AmcError;
use crate::grouping::group_table::GroupTable;
use crate::tools::key::{encode_key, normalize, PriorityAlphabet};

/// A keyed AMC codec.
///
/// The code table is derived from the key once and is read-only afterwards, so a `Codec`
/// can be shared between threads. Replacing the key needs `&mut self`.
///
/// ```
/// use amc::Codec;
///
/// let codec = Codec::new("ZWF0").unwrap(); // "eat"
/// let packed = codec.encode("eat a tea").unwrap();
/// assert_eq!(codec.decode(&packed).unwrap(), b"eat a tea");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codec {
    key: String,
    table: GroupTable,
}

impl Codec {
    /// Build a codec from a base64 key. The empty key is allowed.
    pub fn new(key: &str) -> Result<Self, AmcError> {
        let table = GroupTable::build(&normalize(key)?);
        Ok(Self {
            key: key.to_string(),
            table,
        })
    }

    /// Build a codec straight from raw key bytes. `key()` then reports their base64 form.
    pub fn from_key_bytes(raw: &[u8]) -> Self {
        Self {
            key: encode_key(raw),
            table: GroupTable::build(&PriorityAlphabet::from_raw(raw)),
        }
    }

    /// Replace the key. On error the codec keeps its old key and table.
    pub fn set_key(&mut self, key: &str) -> Result<(), AmcError> {
        let table = GroupTable::build(&normalize(key)?);
        info!("Key replaced.");
        self.table = table;
        self.key = key.to_string();
        Ok(())
    }

    /// The key as it was last given.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn table(&self) -> &GroupTable {
        &self.table
    }

    /// Compress `data`. The output never exceeds `data.len() + 1` bytes.
    pub fn encode<T: AsRef<[u8]>>(&self, data: T) -> Result<Vec<u8>, AmcError> {
        compress(&self.table, data.as_ref())
    }

    /// Restore data produced by `encode` under the same key.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>, AmcError> {
        decompress(&self.table, data)
    }

    /// `decode`, for data that was encoded from a `&str`.
    pub fn decode_string(&self, data: &[u8]) -> Result<String, AmcError> {
        Ok(String::from_utf8(self.decode(data)?)?)
    }

    /// Bits the grouped encoding of `data` would take, flag and padding excluded.
    pub fn structured_bits(&self, data: &[u8]) -> Result<usize, AmcError> {
        structured_bits(&self.table, data)
    }
}

impl Default for Codec {
    /// The codec for the empty key.
    fn default() -> Self {
        Self::from_key_bytes(&[])
    }
}
