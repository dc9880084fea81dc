//! The bitstream module packs and unpacks the AMC bit sequence.
//!
//! AMC output is a single flag bit, a payload of 5-bit group codes (or 8-bit raw bytes), and a
//! run of `1` bits padding the stream out to a whole byte. Bits are always written and read
//! most significant bit first.
//!
//! Everything happens in memory. There is no block framing and no streaming source.
//!
pub mod bitpacker;
pub mod bitreader;
