use log::{debug, trace};

use super::{wrap, CODE_BITS, GROUPS, GROUP_CAPACITY};
use crate::tools::key::PriorityAlphabet;

/// First reserved transition code. Codes 29, 30 and 31 lead to groups g-1, g+1 and g+4.
pub const TRANSITION_BASE: u8 = GROUP_CAPACITY as u8;
/// Group offsets reached by the three transition codes, in code order.
pub const TRANSITION_OFFSETS: [i32; 3] = [-1, 1, 4];

const SLOTS: usize = 1 << CODE_BITS;

/// What a 5-bit code stands for inside one group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// No byte was assigned to this code (only happens in the last group).
    Empty,
    /// A data byte.
    Byte(u8),
    /// Switch to the given group.
    Transition(u8),
}

/// The complete code table for one key.
///
/// Holds the forward map (byte to group and code) and the inverse map (group and code to
/// slot). Built once per key and never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupTable {
    byte_to_group: [u8; 256],
    byte_to_code: [u8; 256],
    slots: [[Slot; SLOTS]; GROUPS],
    counts: [u8; GROUPS],
}

impl GroupTable {
    /// Build the table for a priority alphabet. An empty alphabet is fine and gives the
    /// plain ascending layout.
    pub fn build(alphabet: &PriorityAlphabet) -> Self {
        let mut table = Self {
            byte_to_group: [0; 256],
            byte_to_code: [0; 256],
            slots: [[Slot::Empty; SLOTS]; GROUPS],
            counts: [0; GROUPS],
        };
        let mut assigned = [false; 256];

        // Key bytes first: the i-th unique key byte goes to group i / 29, code i % 29.
        for (i, &byte) in alphabet.as_slice().iter().enumerate() {
            let group = i / GROUP_CAPACITY;
            if group >= GROUPS {
                break;
            }
            table.assign(group, byte);
            assigned[byte as usize] = true;
        }

        // Then every byte the key did not mention, into the first group with room.
        for byte in 0..=255_u8 {
            if assigned[byte as usize] {
                continue;
            }
            match (0..GROUPS).find(|&g| (table.counts[g] as usize) < GROUP_CAPACITY) {
                Some(group) => table.assign(group, byte),
                None => break,
            }
        }

        // Finally the three transition codes of each group.
        for group in 0..GROUPS {
            for (i, offset) in TRANSITION_OFFSETS.iter().enumerate() {
                let target = wrap(group as i32 + offset);
                table.slots[group][TRANSITION_BASE as usize + i] = Slot::Transition(target);
            }
        }

        debug!(
            "Built group table from {} key bytes. Group sizes {:?}.",
            alphabet.len(),
            table.counts
        );
        for group in 0..GROUPS as u8 {
            trace!(
                "Group {}: {} bytes, neighbours {:?}",
                group,
                table.group_len(group),
                table.neighbours(group)
            );
        }
        table
    }

    /// Give `byte` the next free code in `group`.
    fn assign(&mut self, group: usize, byte: u8) {
        let code = self.counts[group];
        trace!("Byte {:#04x} -> group {} code {}", byte, group, code);
        self.byte_to_group[byte as usize] = group as u8;
        self.byte_to_code[byte as usize] = code;
        self.slots[group][code as usize] = Slot::Byte(byte);
        self.counts[group] += 1;
    }

    /// Group holding `byte`.
    pub fn group_of(&self, byte: u8) -> u8 {
        self.byte_to_group[byte as usize]
    }

    /// Code of `byte` inside its own group.
    pub fn code_of(&self, byte: u8) -> u8 {
        self.byte_to_code[byte as usize]
    }

    /// Inverse lookup of a 5-bit code in a group.
    pub fn slot(&self, group: u8, code: u8) -> Slot {
        self.slots[group as usize][code as usize & (SLOTS - 1)]
    }

    /// Number of data bytes held by `group`.
    pub fn group_len(&self, group: u8) -> usize {
        self.counts[group as usize] as usize
    }

    /// The three groups reachable from `group`, in code order.
    pub fn neighbours(&self, group: u8) -> [u8; 3] {
        let mut out = [0; 3];
        for (i, n) in out.iter_mut().enumerate() {
            if let Slot::Transition(target) = self.slot(group, TRANSITION_BASE + i as u8) {
                *n = target;
            }
        }
        out
    }

    /// Code that moves the coder from `from` straight to `to`, if they are neighbours.
    pub fn transition_code(&self, from: u8, to: u8) -> Option<u8> {
        (TRANSITION_BASE..SLOTS as u8).find(|&code| self.slot(from, code) == Slot::Transition(to))
    }

    /// Data bytes of `group` as (code, byte) pairs, in code order.
    pub fn symbols(&self, group: u8) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.slots[group as usize]
            .iter()
            .enumerate()
            .filter_map(|(code, slot)| match slot {
                Slot::Byte(byte) => Some((code as u8, *byte)),
                _ => None,
            })
    }
}
