//! BitReader: reads the packed AMC bitstream back, most significant bit first.
//!
//! The reader borrows the whole encoded message. It never reads past the last byte: every
//! request that would do so returns None and leaves the position unchanged.
//!

const BIT_MASK: u8 = 0xff;

/// Reads a packed AMC message.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader over the encoded bytes.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Bits left to read.
    pub fn remaining(&self) -> usize {
        (self.buffer.len() - self.cursor) * 8 - self.bit_index
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.cursor == self.buffer.len() {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits (n <= 32), or None if fewer than n bits are left.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        /*
        Read as many bits as possible for each step. First take what is left of a partial
        byte, then whole bytes, then the leading bits of one more byte.
        */
        if n > self.remaining() {
            return None;
        }
        let mut result = 0_usize;

        // Partial byte first.
        if self.bit_index > 0 && n > 0 {
            let needed = n.min(8 - self.bit_index);
            result = ((self.buffer[self.cursor] & BIT_MASK >> self.bit_index)
                >> (8 - self.bit_index - needed)) as usize;
            self.bit_index += needed;
            if self.bit_index == 8 {
                self.cursor += 1;
                self.bit_index = 0;
            }
            n -= needed;
        }
        // Whole bytes.
        while n >= 8 {
            result = result << 8 | (self.buffer[self.cursor]) as usize;
            self.cursor += 1;
            n -= 8;
        }
        // Leading bits of the next byte. We are byte aligned here.
        if n > 0 {
            result = result << n | (self.buffer[self.cursor] >> (8 - n)) as usize;
            self.bit_index = n;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_across_bytes_test() {
        // 0 | 00001 | 10100 | 11111 (padding)
        let x = [0b0000_0110, 0b1001_1111];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bint(5), Some(0b00001));
        assert_eq!(br.bint(5), Some(0b10100));
        assert_eq!(br.remaining(), 5);
        assert_eq!(br.bint(5), Some(0b11111));
        assert_eq!(br.bint(5), None);
    }

    #[test]
    fn short_read_test() {
        let x = [0xff, 0x00];
        let mut br = BitReader::new(&x);
        br.bint(3);
        assert_eq!(br.bint(14), None);
        assert_eq!(br.position(), 3);
        assert_eq!(br.bint(13), Some(0b11111_0000_0000));
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.loc(), "[2.1]");
        assert_eq!(br.byte(), Some(b'l' << 1));
    }
}
