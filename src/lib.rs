//! AMC: a keyed, alphabet-adaptive binary codec.
//!
//! Version 0.1.0
//!
//! A shared key (base64) decides how the 256 byte values are laid out over nine groups of
//! 5-bit codes. Text whose bytes the key lists early is written at 5 bits per byte, plus a few
//! transition codes whenever the text moves between groups. Input that would not shrink is
//! copied raw behind a one bit flag, so the output is never more than one byte longer than the
//! input.
//!
//! The key is not a cipher. It only rearranges the code table, and a decoder given the wrong
//! key usually produces garbage rather than an error.
//!
//! Basic usage from the command line:
//!
//! `$> amc -k ZWF0 notes.txt`
//!
//! This writes notes.txt.amc. `amc -d -k ZWF0 notes.txt.amc` restores notes.txt.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod grouping;
pub mod tools;

pub use compression::codec::Codec;
pub use error::AmcError;
