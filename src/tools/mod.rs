//! The tools module provides helper functions for the AMC codec.
//!
//! The tools are:
//! - cli: Command line interface for the amc binary.
//! - freq_count: Byte frequency count, used to suggest keys from sample data.
//! - key: Base64 key decoding and deduplication into the priority alphabet.
//!
pub mod cli;
pub mod freq_count;
pub mod key;
