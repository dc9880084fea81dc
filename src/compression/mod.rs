//! The compression module holds the AMC encoder and decoder and the `Codec` that ties them to a key.
//!
//! Encoding walks the input once. Each byte is written as the 5-bit code it has in its group,
//! preceded by the transition codes that move the coder into that group when it is somewhere
//! else. The coder always starts in group 0.
//!
//! If that grouped stream would not be strictly shorter than the input itself, the input is
//! written raw instead. A single leading flag bit tells the decoder which form follows:
//! - 0: grouped 5-bit codes.
//! - 1: raw 8-bit bytes.
//!
//! The stream is then padded with `1` bits to a whole byte. There is no header, so both sides
//! must already agree on the key.
//!

pub mod codec;
pub mod compress;
pub mod decompress;
