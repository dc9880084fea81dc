use log::error;

/// Creates a bitstream for output.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    /// Bits pushed so far, not counting padding.
    written: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the size specified. Call flush()
    /// to pad and push the bit queue to the buffer before reading the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            written: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the `depth` least significant bits of `data` (0-32 bits).
    pub fn out(&mut self, depth: u8, data: u32) {
        if depth == 0 {
            return;
        }
        let mask = u32::MAX >> (32 - depth);
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & mask) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.written += depth as usize;
        self.write_stream();
    }

    /// Writes a single bit.
    pub fn bit(&mut self, set: bool) {
        self.out(1, set as u32);
    }

    /// Writes a 5-bit group code.
    pub fn out5(&mut self, code: u8) {
        self.out(5, code as u32);
    }

    /// Puts a whole byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out(8, data as u32);
    }

    /// Number of bits written so far (padding excluded).
    pub fn bit_len(&self) -> usize {
        self.written
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 1s in the least
    /// significant bits. Returns the number of padding bits added.
    pub fn flush(&mut self) -> u8 {
        let mut padding = 0;
        if self.q_bits > 0 {
            padding = 8 - self.q_bits;
            self.queue <<= padding; //make room for the padding
            self.queue |= (1_u64 << padding) - 1; //pad the queue with ones
            self.q_bits += padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
        padding
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]", self.written / 8, self.written % 8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;

    #[test]
    fn out8_test() {
        let mut bp = BitPacker::new(100);
        bp.out8(b'!');
        bp.out8(b' ');
        assert_eq!(bp.flush(), 0);
        assert_eq!(bp.output, "! ".as_bytes());
    }

    #[test]
    fn out5_and_padding_test() {
        let mut bp = BitPacker::new(100);
        bp.bit(false);
        bp.out5(0b00001);
        bp.out5(0b10100);
        assert_eq!(bp.bit_len(), 11);
        assert_eq!("[1.3]", &bp.loc());
        assert_eq!(bp.flush(), 5);
        assert_eq!(bp.output, vec![0b0000_0110, 0b1001_1111]);
    }

    #[test]
    fn empty_flush_test() {
        let mut bp = BitPacker::new(0);
        assert_eq!(bp.flush(), 0);
        assert!(bp.output.is_empty());
    }

    #[test]
    fn flag_only_test() {
        let mut bp = BitPacker::new(1);
        bp.bit(true);
        assert_eq!(bp.flush(), 7);
        assert_eq!(bp.output, vec![0xff]);
    }

    #[test]
    fn wide_out_test() {
        let mut bp = BitPacker::new(100);
        bp.out(32, 0b00100001_00100000_00100001_00100000);
        bp.flush();
        assert_eq!(bp.output, [33, 32, 33, 32]);
    }
}
