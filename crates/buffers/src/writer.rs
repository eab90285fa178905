//! Growable byte writer producing value-stream payloads.

/// A binary writer that grows automatically as needed.
///
/// Emits the same primitives [`crate::Reader`] consumes: single bytes,
/// base-128 varints, little-endian doubles and raw spans.
///
/// # Example
///
/// ```
/// use hippy_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'U');
/// writer.varint(300);
/// assert_eq!(writer.flush(), [0x55, 0xac, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
            x0: 0,
        }
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.uint8.len()
    }

    /// Returns the bytes written since the last flush.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..].to_vec();
        self.x0 = self.uint8.len();
        result
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes a base-128 unsigned varint.
    pub fn varint(&mut self, mut n: u64) {
        loop {
            let low7 = (n & 0x7f) as u8;
            n >>= 7;
            if n == 0 {
                self.u8(low7);
                return;
            }
            self.u8(low7 | 0x80);
        }
    }

    /// Writes a zig-zag encoded signed 32-bit integer as a varint.
    pub fn zigzag_i32(&mut self, n: i32) {
        let encoded = ((n << 1) ^ (n >> 31)) as u32;
        self.varint(encoded as u64);
    }

    /// Writes an IEEE-754 double, little-endian.
    #[inline]
    pub fn f64_le(&mut self, val: f64) {
        self.buf(&val.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_varint() {
        let mut writer = Writer::new();
        writer.varint(0);
        writer.varint(127);
        writer.varint(128);
        assert_eq!(writer.flush(), [0x00, 0x7f, 0x80, 0x01]);
    }

    #[test]
    fn test_varint_u64_max_is_ten_bytes() {
        let mut writer = Writer::new();
        writer.varint(u64::MAX);
        let data = writer.flush();
        assert_eq!(data.len(), 10);
        assert_eq!(data[9], 0x01);
    }

    #[test]
    fn test_zigzag() {
        let mut writer = Writer::new();
        writer.zigzag_i32(0);
        writer.zigzag_i32(-1);
        writer.zigzag_i32(1);
        writer.zigzag_i32(-2);
        assert_eq!(writer.flush(), [0x00, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_f64_le() {
        let mut writer = Writer::new();
        writer.f64_le(1.0);
        assert_eq!(writer.flush(), [0, 0, 0, 0, 0, 0, 0xf0, 0x3f]);
    }
}
