//! The grouping module builds the keyed code table used by the AMC codec.
//!
//! The 256 byte values are split into nine groups. Inside a group every byte has a 5-bit code,
//! so a group holds at most 29 data bytes plus three reserved transition codes (29, 30, 31)
//! that move the coder to a neighbouring group. The neighbours of group `g` are `g-1`, `g+1`
//! and `g+4`, all taken modulo 9.
//!
//! Bytes from the key are placed first, in key order, so the bytes the key lists early end up
//! in group 0, where the coder starts and never pays for a transition. Every other byte value
//! fills the remaining slots in ascending order.
//!
//! - group_table: builds the forward and inverse maps for a priority alphabet.
//! - router: finds the chain of transition hops between any two groups.
//!

pub mod group_table;
pub mod router;

/// Number of groups in the table.
pub const GROUPS: usize = 9;
/// Data codes available in each group.
pub const GROUP_CAPACITY: usize = 29;
/// Width of every group code in bits.
pub const CODE_BITS: u8 = 5;

/// Wraps any group offset back into 0..9.
pub fn wrap(i: i32) -> u8 {
    i.rem_euclid(GROUPS as i32) as u8
}
