use log::{debug, trace};

use crate::bitstream::bitpacker::BitPacker;
use crate::error::AmcError;
use crate::grouping::group_table::GroupTable;
use crate::grouping::router::route;
use crate::grouping::CODE_BITS;

/// Fallback flag values, the first bit of every message.
pub const FLAG_STRUCTURED: bool = false;
pub const FLAG_RAW: bool = true;

/// Bits the grouped encoding of `data` needs, flag and padding excluded.
pub fn structured_bits(table: &GroupTable, data: &[u8]) -> Result<usize, AmcError> {
    let mut group = 0;
    let mut codes = 0;
    for &byte in data {
        let next = table.group_of(byte);
        if next != group {
            codes += route(table, group, next)?.len();
            group = next;
        }
        codes += 1;
    }
    Ok(codes * CODE_BITS as usize)
}

/// Encode `data` with `table`.
///
/// The grouped encoding is used when it is strictly shorter than 8 bits per byte, otherwise
/// the bytes are copied raw behind a `1` flag. Either way the stream is padded with `1` bits
/// to a whole byte.
pub fn compress(table: &GroupTable, data: &[u8]) -> Result<Vec<u8>, AmcError> {
    let structured = structured_bits(table, data)?;
    let raw = data.len() * 8;

    let mut bp = BitPacker::new((structured.min(raw) + 8) / 8);
    if raw > structured {
        debug!(
            "Encoding {} bytes grouped: {} bits instead of {}.",
            data.len(),
            structured,
            raw
        );
        bp.bit(FLAG_STRUCTURED);
        let mut group = 0;
        for &byte in data {
            let next = table.group_of(byte);
            if next != group {
                route(table, group, next)?
                    .codes()
                    .iter()
                    .for_each(|&code| bp.out5(code));
                group = next;
            }
            bp.out5(table.code_of(byte));
        }
    } else {
        debug!(
            "Encoding {} bytes raw: grouped would take {} bits.",
            data.len(),
            structured
        );
        bp.bit(FLAG_RAW);
        data.iter().for_each(|&byte| bp.out8(byte));
    }

    let padding = bp.flush();
    trace!(
        "Wrote {} bits plus {} padding, ending at {}.",
        bp.bit_len(),
        padding,
        bp.loc()
    );
    Ok(bp.output)
}
