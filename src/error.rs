//! Error type shared by the key normalizer, the table builder and the bit codec.

use std::fmt;

/// Errors returned by AMC key handling, encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmcError {
    /// The key is not valid base64. The codec keeps its previous tables.
    KeyFormat(base64::DecodeError),

    /// No path of table edges leads from one group to the other. A correctly
    /// built table never produces this.
    Routing { from: u8, to: u8 },

    /// A 5-bit window has no entry in the current group. The data was not
    /// produced by a codec sharing this key.
    CorruptStream { offset: usize, group: u8, code: u8 },

    /// Decode was handed zero bytes, so there is no fallback flag to read.
    EmptyStream,

    /// The decoded bytes are not valid UTF-8.
    Utf8(std::string::FromUtf8Error),
}

impl fmt::Display for AmcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyFormat(e) => write!(f, "key is not valid base64: {e}"),
            Self::Routing { from, to } => {
                write!(f, "no transition path from group {from} to group {to}")
            }
            Self::CorruptStream {
                offset,
                group,
                code,
            } => write!(
                f,
                "corrupt stream: code {code} has no entry in group {group} (bit {offset})"
            ),
            Self::EmptyStream => write!(f, "empty stream, missing fallback flag"),
            Self::Utf8(e) => write!(f, "decoded data is not valid UTF-8: {e}"),
        }
    }
}

impl std::error::Error for AmcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::KeyFormat(e) => Some(e),
            Self::Utf8(e) => Some(e),
            _ => None,
        }
    }
}

impl From<base64::DecodeError> for AmcError {
    fn from(e: base64::DecodeError) -> Self {
        Self::KeyFormat(e)
    }
}

impl From<std::string::FromUtf8Error> for AmcError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::Utf8(e)
    }
}

/// Lets the command line keep plain `io::Result` signatures.
impl From<AmcError> for std::io::Error {
    fn from(e: AmcError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    }
}
