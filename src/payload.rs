//! The packed bitstream of an un-armored payload.

use alloc::vec::Vec;

/// A packed, big-endian bitstream.
///
/// Bits are addressed most-significant first across the whole buffer: bit 0
/// is the top bit of the first byte, bit 8 the top bit of the second. For a
/// payload un-armored from symbols, bit `i` is bit `i % 6` of symbol
/// `i / 6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Wrap an already packed byte buffer.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The packed bytes of the bitstream.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bits in the stream, counting any trailing padding.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Extract the bits `[start, end)` into a new buffer.
    ///
    /// The first extracted bit becomes the most significant bit of the first
    /// returned byte, and any bits of the final byte beyond `end - start`
    /// are zero. Returns an empty buffer when `end <= start`.
    ///
    /// # Panics
    ///
    /// Panics if `end` exceeds [`bit_len`](Self::bit_len).
    pub fn bits(&self, start: usize, end: usize) -> Vec<u8> {
        assert!(
            end <= self.bit_len(),
            "bit range end ({end}) exceeds the stream length ({})",
            self.bit_len(),
        );

        if end <= start {
            return Vec::new();
        }

        let count = end - start;
        let offset = start / 8;
        let shift = start % 8;

        let mut bits = Vec::with_capacity(count.div_ceil(8));

        for i in 0..count.div_ceil(8) {
            let high = self.bytes[offset + i] << shift;

            // Shifting a byte by eight is not defined, so an aligned window
            // must not borrow from the following byte. The final window may
            // end flush with the buffer, where there is no byte to borrow
            // from either.
            let low = match shift {
                0 => 0,
                _ => self
                    .bytes
                    .get(offset + i + 1)
                    .map_or(0, |b| b >> (8 - shift)),
            };

            bits.push(high | low);
        }

        let partial = count % 8;
        if partial != 0 {
            let last = bits.len() - 1;
            bits[last] &= 0xFF << (8 - partial);
        }

        bits
    }
}
