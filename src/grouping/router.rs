use log::trace;

use super::group_table::GroupTable;
use super::wrap;
use crate::error::AmcError;

/// Longest chain of transition codes between two groups.
pub const MAX_HOPS: usize = 3;

/// A chain of transition hops from one group to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    groups: [u8; MAX_HOPS],
    codes: [u8; MAX_HOPS],
    len: usize,
}

impl Route {
    /// Groups entered by each hop. The last one is the destination.
    pub fn groups(&self) -> &[u8] {
        &self.groups[..self.len]
    }

    /// Transition codes to emit, one per hop.
    pub fn codes(&self) -> &[u8] {
        &self.codes[..self.len]
    }

    /// Number of hops.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// `old - new`, with the single out-of-range value (8 -> 0) folded to 1.
pub fn group_distance(old: u8, new: u8) -> i32 {
    let dist = old as i32 - new as i32;
    if dist >= 8 {
        return 1;
    }
    dist
}

/// Groups visited between `old` and `new`, as offsets applied one after the other.
/// The final hop always lands on `new` itself, so it is not listed.
fn waypoints(dist: i32) -> Option<&'static [i32]> {
    let via: &'static [i32] = match dist {
        1 | -1 | 8 | -8 | -4 | 5 => &[],
        -2 => &[1],
        2 => &[-1],
        -3 | 4 | 6 | -5 => &[4],
        // Two steps back. (The +1, +1 path does not reach old + 7.)
        -7 => &[-1],
        3 | 7 => &[-1, -1],
        -6 => &[4, 1],
        _ => return None,
    };
    Some(via)
}

/// Find the transition codes that take the coder from group `old` to group `new`.
///
/// Every hop is checked against the three transition entries of the group it leaves,
/// so a code is only ever emitted if the decoder's table holds it.
pub fn route(table: &GroupTable, old: u8, new: u8) -> Result<Route, AmcError> {
    let err = || AmcError::Routing { from: old, to: new };
    let via = waypoints(group_distance(old, new)).ok_or_else(err)?;

    let mut out = Route {
        groups: [0; MAX_HOPS],
        codes: [0; MAX_HOPS],
        len: 0,
    };
    let mut at = old;
    let stops = via
        .iter()
        .scan(old as i32, |g, offset| {
            *g = wrap(*g + offset) as i32;
            Some(*g as u8)
        })
        .chain(std::iter::once(new));
    for next in stops {
        let code = table.transition_code(at, next).ok_or_else(err)?;
        out.groups[out.len] = next;
        out.codes[out.len] = code;
        out.len += 1;
        at = next;
    }

    trace!("Route {} -> {}: {:?}", old, new, out.groups());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::{group_distance, route, MAX_HOPS};
    use crate::error::AmcError;
    use crate::grouping::group_table::{GroupTable, Slot};
    use crate::grouping::GROUPS;
    use crate::tools::key::PriorityAlphabet;

    fn table() -> GroupTable {
        GroupTable::build(&PriorityAlphabet::default())
    }

    #[test]
    fn distance_fold_test() {
        assert_eq!(group_distance(8, 0), 1);
        assert_eq!(group_distance(0, 8), -8);
        assert_eq!(group_distance(3, 5), -2);
    }

    #[test]
    fn single_hop_test() {
        let t = table();
        assert_eq!(route(&t, 0, 1).unwrap().codes(), &[30]);
        assert_eq!(route(&t, 1, 0).unwrap().codes(), &[29]);
        assert_eq!(route(&t, 8, 0).unwrap().codes(), &[30]);
        assert_eq!(route(&t, 0, 8).unwrap().codes(), &[29]);
        assert_eq!(route(&t, 2, 6).unwrap().codes(), &[31]);
        assert_eq!(route(&t, 7, 2).unwrap().codes(), &[31]);
    }

    #[test]
    fn multi_hop_test() {
        let t = table();
        let r = route(&t, 0, 2).unwrap();
        assert_eq!(r.groups(), &[1, 2]);
        assert_eq!(r.codes(), &[30, 30]);

        let r = route(&t, 0, 6).unwrap();
        assert_eq!(r.groups(), &[4, 5, 6]);
        assert_eq!(r.codes(), &[31, 30, 30]);

        let r = route(&t, 7, 0).unwrap();
        assert_eq!(r.groups(), &[6, 5, 0]);

        let r = route(&t, 0, 7).unwrap();
        assert_eq!(r.groups(), &[8, 7]);
        assert_eq!(r.codes(), &[29, 29]);
    }

    #[test]
    fn every_pair_routes_test() {
        let t = table();
        for from in 0..GROUPS as u8 {
            for to in 0..GROUPS as u8 {
                if from == to {
                    continue;
                }
                let r = route(&t, from, to).unwrap();
                assert!(!r.is_empty() && r.len() <= MAX_HOPS);
                assert_eq!(*r.groups().last().unwrap(), to);
                // Replay the hops through the inverse table, like the decoder does
                let mut at = from;
                for &code in r.codes() {
                    match t.slot(at, code) {
                        Slot::Transition(next) => at = next,
                        other => panic!("{from}->{to}: code {code} is {other:?}"),
                    }
                }
                assert_eq!(at, to);
            }
        }
    }

    #[test]
    fn same_group_is_an_error_test() {
        assert_eq!(
            route(&table(), 3, 3),
            Err(AmcError::Routing { from: 3, to: 3 })
        );
    }
}
