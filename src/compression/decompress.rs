use log::{debug, trace};

use crate::bitstream::bitreader::BitReader;
use crate::error::AmcError;
use crate::grouping::group_table::{GroupTable, Slot};
use crate::grouping::CODE_BITS;

/// Decode a message produced by `compress` with the same table.
pub fn decompress(table: &GroupTable, data: &[u8]) -> Result<Vec<u8>, AmcError> {
    let mut br = BitReader::new(data);

    let raw = br.bool_bit().ok_or(AmcError::EmptyStream)?;
    if raw {
        // Whole bytes only. What is left after the last one is padding.
        let mut out = Vec::with_capacity(br.remaining() / 8);
        while let Some(byte) = br.byte() {
            out.push(byte);
        }
        debug!("Decoded {} raw bytes, stopped at {}.", out.len(), br.loc());
        return Ok(out);
    }

    let mut out = Vec::with_capacity(br.remaining() / CODE_BITS as usize);
    let mut group = 0;
    // bint only yields whole windows, so a short run of padding is never seen. A whole
    // window of padding is code 31, a harmless transition at the very end.
    let mut offset = br.position();
    while let Some(code) = br.bint(CODE_BITS as usize) {
        let code = code as u8;
        match table.slot(group, code) {
            Slot::Byte(byte) => out.push(byte),
            Slot::Transition(next) => {
                trace!("Bit {}: group {} -> {}", offset, group, next);
                group = next;
            }
            Slot::Empty => {
                return Err(AmcError::CorruptStream {
                    offset,
                    group,
                    code,
                })
            }
        }
        offset = br.position();
    }
    debug!("Decoded {} grouped bytes, stopped at {}.", out.len(), br.loc());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::decompress;
    use crate::compression::compress::compress;
    use crate::error::AmcError;
    use crate::grouping::group_table::GroupTable;
    use crate::tools::key::PriorityAlphabet;

    #[test]
    fn eat_test() {
        let table = GroupTable::build(&PriorityAlphabet::from_raw(b"eat"));
        assert_eq!(decompress(&table, &[0b0000_0000, 0b0010_0010]).unwrap(), b"eat");
        assert_eq!(
            decompress(&table, &[0b0000_0000, 0b0010_0010, 0b0001_0111]).unwrap(),
            b"eatt"
        );
    }

    #[test]
    fn raw_test() {
        let table = GroupTable::build(&PriorityAlphabet::default());
        assert_eq!(decompress(&table, &[0xff, 0xff]).unwrap(), vec![255]);
        assert_eq!(decompress(&table, &[0xff]).unwrap(), b"");
        // 1 | 01000001 | 0100001 0 | 1111111 -> "AB"
        let data = [0b1010_0000, 0b1010_0001, 0b0111_1111];
        assert_eq!(decompress(&table, &data).unwrap(), b"AB");
    }

    #[test]
    fn full_padding_window_test() {
        let table = GroupTable::build(&PriorityAlphabet::from_raw(b"eat"));
        // 0 | 00000 | 00001 | 11111 (padding) + 11 (padding)
        let out = compress(&table, b"ea").unwrap();
        assert_eq!(out, vec![0b0000_0000, 0b0011_1111]);
        assert_eq!(decompress(&table, &out).unwrap(), b"ea");
    }

    #[test]
    fn transitions_test() {
        let table = GroupTable::build(&PriorityAlphabet::default());
        // Runs of six bytes in groups visited out of order, group 1 -> 8 included
        let data: Vec<u8> = [0_u8, 5, 2, 8, 3, 7, 1, 8, 6, 4, 0]
            .iter()
            .flat_map(|&g| (0..6).map(move |k| g * 29 + k))
            .collect();
        let out = compress(&table, &data).unwrap();
        assert_eq!(out[0] >> 7, 0, "expected the grouped path");
        assert_eq!(decompress(&table, &out).unwrap(), data);
    }

    #[test]
    fn short_tail_test() {
        let table = GroupTable::build(&PriorityAlphabet::from_raw(b"eat"));
        // 0 | 00000 | 00 : the last two bits are too few for a code and are dropped
        assert_eq!(decompress(&table, &[0b0000_0000]).unwrap(), b"e");
        // 0 | 11111 (padding window) | 11
        assert_eq!(decompress(&table, &[0b0111_1111]).unwrap(), b"");
    }

    #[test]
    fn empty_stream_test() {
        let table = GroupTable::build(&PriorityAlphabet::default());
        assert_eq!(decompress(&table, &[]), Err(AmcError::EmptyStream));
    }

    #[test]
    fn corrupt_stream_test() {
        let table = GroupTable::build(&PriorityAlphabet::default());
        // 0 | 11101 (to group 8) | 11000 (code 24, unused in group 8) | 00000
        let data = [0b0111_0111, 0b0000_0000];
        assert_eq!(
            decompress(&table, &data),
            Err(AmcError::CorruptStream {
                offset: 6,
                group: 8,
                code: 24
            })
        );
    }
}
