use std::fmt;

use byteorder::{BigEndian, ByteOrder};

/// Linear remap of `value` from one range to another.
#[inline]
pub fn map_value(value: f64, from_lo: f64, from_hi: f64, to_lo: f64, to_hi: f64) -> f64 {
    let scaled = (value - from_lo) / (from_hi - from_lo);
    to_lo + scaled * (to_hi - to_lo)
}

/// Access outside the readable/writable window of the buffer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BufferError {
    pub offset: usize,
    pub width: usize,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "buffer access of {} bytes at offset {} out of range", self.width, self.offset)
    }
}

impl std::error::Error for BufferError {}

pub type BufferResult<T> = Result<T, BufferError>;

/// Fixed-capacity byte buffer with typed big-endian accessors.
///
/// All offsets are shifted by a relocatable `base` so that command encoders
/// can address payload bytes as offset 0 regardless of where the sub-packet
/// sits in the datagram. The base is installed by the command machinery and
/// cleared once the sub-packet is finalised.
pub struct ByteBuffer {
    data: Vec<u8>,
    limit: usize,
    base: usize,
}

impl ByteBuffer {
    #[inline]
    pub fn new(capacity: usize) -> ByteBuffer {
        ByteBuffer {
            data: vec![0; capacity],
            limit: capacity,
            base: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of addressable bytes. Equal to the capacity except after
    /// `load`, where it shrinks to the payload length.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Zero the buffer, clear the base and make the full capacity writable.
    #[inline]
    pub fn reset(&mut self) {
        for byte in self.data.iter_mut() {
            *byte = 0;
        }
        self.limit = self.data.len();
        self.base = 0;
    }

    /// Replace the buffer contents with an inbound payload. Reads beyond the
    /// payload length fail afterwards.
    #[inline]
    pub fn load(&mut self, payload: &[u8]) {
        let count = payload.len().min(self.data.len());
        self.data[..count].copy_from_slice(&payload[..count]);
        self.limit = count;
        self.base = 0;
    }

    #[inline]
    pub fn set_base(&mut self, base: usize) {
        self.base = base;
    }

    #[inline]
    pub fn clear_base(&mut self) {
        self.base = 0;
    }

    /// Raw backing bytes, ignoring base and limit.
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn span(&self, offset: usize, width: usize) -> BufferResult<usize> {
        let index = self.base + offset;

        if index + width > self.limit {
            return Err(BufferError { offset, width });
        }

        Ok(index)
    }

    // ------------------------------------------------------------------
    // Integers
    // ------------------------------------------------------------------

    #[inline]
    pub fn u8(&self, offset: usize) -> BufferResult<u8> {
        let i = self.span(offset, 1)?;
        Ok(self.data[i])
    }

    #[inline]
    pub fn s8(&self, offset: usize) -> BufferResult<i8> {
        Ok(self.u8(offset)? as i8)
    }

    #[inline]
    pub fn u16(&self, offset: usize) -> BufferResult<u16> {
        let i = self.span(offset, 2)?;
        Ok(BigEndian::read_u16(&self.data[i..i + 2]))
    }

    #[inline]
    pub fn s16(&self, offset: usize) -> BufferResult<i16> {
        Ok(self.u16(offset)? as i16)
    }

    #[inline]
    pub fn u32(&self, offset: usize) -> BufferResult<u32> {
        let i = self.span(offset, 4)?;
        Ok(BigEndian::read_u32(&self.data[i..i + 4]))
    }

    #[inline]
    pub fn s32(&self, offset: usize) -> BufferResult<i32> {
        Ok(self.u32(offset)? as i32)
    }

    #[inline]
    pub fn u64(&self, offset: usize) -> BufferResult<u64> {
        let i = self.span(offset, 8)?;
        Ok(BigEndian::read_u64(&self.data[i..i + 8]))
    }

    #[inline]
    pub fn s64(&self, offset: usize) -> BufferResult<i64> {
        Ok(self.u64(offset)? as i64)
    }

    #[inline]
    pub fn set_u8(&mut self, offset: usize, value: u8) -> BufferResult<()> {
        let i = self.span(offset, 1)?;
        self.data[i] = value;
        Ok(())
    }

    #[inline]
    pub fn set_s8(&mut self, offset: usize, value: i8) -> BufferResult<()> {
        self.set_u8(offset, value as u8)
    }

    #[inline]
    pub fn set_u16(&mut self, offset: usize, value: u16) -> BufferResult<()> {
        let i = self.span(offset, 2)?;
        BigEndian::write_u16(&mut self.data[i..i + 2], value);
        Ok(())
    }

    #[inline]
    pub fn set_s16(&mut self, offset: usize, value: i16) -> BufferResult<()> {
        self.set_u16(offset, value as u16)
    }

    #[inline]
    pub fn set_u32(&mut self, offset: usize, value: u32) -> BufferResult<()> {
        let i = self.span(offset, 4)?;
        BigEndian::write_u32(&mut self.data[i..i + 4], value);
        Ok(())
    }

    #[inline]
    pub fn set_s32(&mut self, offset: usize, value: i32) -> BufferResult<()> {
        self.set_u32(offset, value as u32)
    }

    #[inline]
    pub fn set_u64(&mut self, offset: usize, value: u64) -> BufferResult<()> {
        let i = self.span(offset, 8)?;
        BigEndian::write_u64(&mut self.data[i..i + 8], value);
        Ok(())
    }

    #[inline]
    pub fn change_u8(&mut self, offset: usize, func: impl FnOnce(u8) -> u8) -> BufferResult<()> {
        let value = func(self.u8(offset)?);
        self.set_u8(offset, value)
    }

    #[inline]
    pub fn change_u16(&mut self, offset: usize, func: impl FnOnce(u16) -> u16) -> BufferResult<()> {
        let value = func(self.u16(offset)?);
        self.set_u16(offset, value)
    }

    #[inline]
    pub fn change_u32(&mut self, offset: usize, func: impl FnOnce(u32) -> u32) -> BufferResult<()> {
        let value = func(self.u32(offset)?);
        self.set_u32(offset, value)
    }

    // ------------------------------------------------------------------
    // Flag bits
    // ------------------------------------------------------------------

    #[inline]
    pub fn flag8(&self, offset: usize, bit: u8) -> BufferResult<bool> {
        Ok(self.u8(offset)? & (1 << bit) != 0)
    }

    #[inline]
    pub fn flag16(&self, offset: usize, bit: u8) -> BufferResult<bool> {
        Ok(self.u16(offset)? & (1 << bit) != 0)
    }

    #[inline]
    pub fn flag32(&self, offset: usize, bit: u8) -> BufferResult<bool> {
        Ok(self.u32(offset)? & (1 << bit) != 0)
    }

    #[inline]
    pub fn set_flag8(&mut self, offset: usize, bit: u8) -> BufferResult<()> {
        self.change_u8(offset, |v| v | (1 << bit))
    }

    #[inline]
    pub fn set_flag16(&mut self, offset: usize, bit: u8) -> BufferResult<()> {
        self.change_u16(offset, |v| v | (1 << bit))
    }

    #[inline]
    pub fn set_flag32(&mut self, offset: usize, bit: u8) -> BufferResult<()> {
        self.change_u32(offset, |v| v | (1 << bit))
    }

    // ------------------------------------------------------------------
    // Fixed-point scalars: value = raw / factor
    // ------------------------------------------------------------------

    #[inline]
    pub fn fixed_u8(&self, offset: usize, factor: f64) -> BufferResult<f64> {
        Ok(self.u8(offset)? as f64 / factor)
    }

    #[inline]
    pub fn fixed_u16(&self, offset: usize, factor: f64) -> BufferResult<f64> {
        Ok(self.u16(offset)? as f64 / factor)
    }

    #[inline]
    pub fn fixed_s16(&self, offset: usize, factor: f64) -> BufferResult<f64> {
        Ok(self.s16(offset)? as f64 / factor)
    }

    #[inline]
    pub fn fixed_u32(&self, offset: usize, factor: f64) -> BufferResult<f64> {
        Ok(self.u32(offset)? as f64 / factor)
    }

    #[inline]
    pub fn fixed_s32(&self, offset: usize, factor: f64) -> BufferResult<f64> {
        Ok(self.s32(offset)? as f64 / factor)
    }

    // Float to integer casts saturate, which gives the implicit clamping the
    // wire encoding expects for out-of-range scalars.

    #[inline]
    pub fn set_fixed_u8(&mut self, offset: usize, factor: f64, value: f64) -> BufferResult<()> {
        self.set_u8(offset, (value * factor) as u8)
    }

    #[inline]
    pub fn set_fixed_u16(&mut self, offset: usize, factor: f64, value: f64) -> BufferResult<()> {
        self.set_u16(offset, (value * factor) as u16)
    }

    #[inline]
    pub fn set_fixed_s16(&mut self, offset: usize, factor: f64, value: f64) -> BufferResult<()> {
        self.set_s16(offset, (value * factor) as i16)
    }

    #[inline]
    pub fn set_fixed_u32(&mut self, offset: usize, factor: f64, value: f64) -> BufferResult<()> {
        self.set_u32(offset, (value * factor) as u32)
    }

    #[inline]
    pub fn set_fixed_s32(&mut self, offset: usize, factor: f64, value: f64) -> BufferResult<()> {
        self.set_s32(offset, (value * factor) as i32)
    }

    // ------------------------------------------------------------------
    // Linearly-scaled scalars
    // ------------------------------------------------------------------

    #[inline]
    pub fn scaled_s16(
        &self,
        offset: usize,
        from: (f64, f64),
        to: (f64, f64),
    ) -> BufferResult<f64> {
        Ok(map_value(self.s16(offset)? as f64, from.0, from.1, to.0, to.1))
    }

    #[inline]
    pub fn set_scaled_s16(
        &mut self,
        offset: usize,
        from: (f64, f64),
        to: (f64, f64),
        value: f64,
    ) -> BufferResult<()> {
        self.set_s16(offset, map_value(value, from.0, from.1, to.0, to.1) as i16)
    }

    // ------------------------------------------------------------------
    // Strings: UTF-8, NUL padded, truncated to field width
    // ------------------------------------------------------------------

    #[inline]
    pub fn string(&self, offset: usize, width: usize) -> BufferResult<String> {
        let i = self.span(offset, width)?;
        let field = &self.data[i..i + width];
        let end = field.iter().position(|&b| b == 0).unwrap_or(width);

        Ok(String::from_utf8_lossy(&field[..end]).into_owned())
    }

    #[inline]
    pub fn set_string(&mut self, offset: usize, width: usize, value: &str) -> BufferResult<()> {
        let i = self.span(offset, width)?;
        let field = &mut self.data[i..i + width];
        let bytes = value.as_bytes();
        let count = bytes.len().min(width);

        field[..count].copy_from_slice(&bytes[..count]);
        for byte in field[count..].iter_mut() {
            *byte = 0;
        }

        Ok(())
    }

    #[inline]
    pub fn set_bytes(&mut self, offset: usize, bytes: &[u8]) -> BufferResult<()> {
        let i = self.span(offset, bytes.len())?;
        self.data[i..i + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Base-ignoring access, used for header stamping and sub-packet framing
    // ------------------------------------------------------------------

    #[inline]
    pub fn raw_u8(&self, index: usize) -> u8 {
        self.data[index]
    }

    #[inline]
    pub fn set_raw_u8(&mut self, index: usize, value: u8) {
        self.data[index] = value;
    }

    #[inline]
    pub fn set_raw_u16(&mut self, index: usize, value: u16) {
        BigEndian::write_u16(&mut self.data[index..index + 2], value);
    }

    #[inline]
    pub fn raw_tag(&self, index: usize) -> [u8; 4] {
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&self.data[index..index + 4]);
        tag
    }

    #[inline]
    pub fn set_raw_tag(&mut self, index: usize, tag: &[u8; 4]) {
        self.data[index..index + 4].copy_from_slice(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_roundtrips() {
        let mut buf = ByteBuffer::new(64);

        buf.set_u8(0, 0xAB).unwrap();
        buf.set_s8(1, -5).unwrap();
        buf.set_u16(2, 0x1234).unwrap();
        buf.set_s16(4, -16000).unwrap();
        buf.set_u32(6, 0xDEADBEEF).unwrap();
        buf.set_s32(10, -1_000_000).unwrap();
        buf.set_u64(14, 0x0102030405060708).unwrap();

        assert_eq!(buf.u8(0).unwrap(), 0xAB);
        assert_eq!(buf.s8(1).unwrap(), -5);
        assert_eq!(buf.u16(2).unwrap(), 0x1234);
        assert_eq!(buf.s16(4).unwrap(), -16000);
        assert_eq!(buf.u32(6).unwrap(), 0xDEADBEEF);
        assert_eq!(buf.s32(10).unwrap(), -1_000_000);
        assert_eq!(buf.u64(14).unwrap(), 0x0102030405060708);
    }

    #[test]
    fn test_big_endian_layout() {
        let mut buf = ByteBuffer::new(8);
        buf.set_u16(0, 0x5DB7).unwrap();

        assert_eq!(buf.raw()[0], 0x5D);
        assert_eq!(buf.raw()[1], 0xB7);
    }

    #[test]
    fn test_bounds_checked() {
        let mut buf = ByteBuffer::new(8);

        assert_eq!(buf.u16(7).unwrap_err(), BufferError { offset: 7, width: 2 });
        assert_eq!(buf.set_u32(6, 1).unwrap_err(), BufferError { offset: 6, width: 4 });
        assert!(buf.u64(0).is_ok());
    }

    #[test]
    fn test_load_limits_reads_to_payload() {
        let mut buf = ByteBuffer::new(64);
        buf.load(&[0x00, 0x02, 0x01, 0x00, 0x02, 0x00]);

        assert_eq!(buf.limit(), 6);
        assert_eq!(buf.u16(0).unwrap(), 2);
        assert!(buf.u8(6).is_err());
        assert!(buf.u16(5).is_err());
    }

    #[test]
    fn test_base_relocation() {
        let mut buf = ByteBuffer::new(64);
        buf.set_base(20);
        buf.set_u16(2, 0x0003).unwrap();

        assert_eq!(buf.raw()[22], 0x00);
        assert_eq!(buf.raw()[23], 0x03);
        assert_eq!(buf.u16(2).unwrap(), 3);

        buf.clear_base();
        assert_eq!(buf.u16(22).unwrap(), 3);
    }

    #[test]
    fn test_flags() {
        let mut buf = ByteBuffer::new(8);

        buf.set_flag8(0, 0).unwrap();
        buf.set_flag8(0, 3).unwrap();
        assert_eq!(buf.u8(0).unwrap(), 0b0000_1001);
        assert!(buf.flag8(0, 3).unwrap());
        assert!(!buf.flag8(0, 2).unwrap());

        // Bit 8 of a big-endian u16 lands in the first byte.
        buf.reset();
        buf.set_flag16(0, 8).unwrap();
        assert_eq!(buf.raw()[0], 0x01);
        assert_eq!(buf.raw()[1], 0x00);

        buf.reset();
        buf.set_flag32(0, 24).unwrap();
        assert_eq!(buf.raw()[0], 0x01);
    }

    #[test]
    fn test_fixed_point() {
        let mut buf = ByteBuffer::new(16);

        buf.set_fixed_u16(0, 10.0, 123.4).unwrap();
        assert_eq!(buf.u16(0).unwrap(), 1234);
        assert!((buf.fixed_u16(0, 10.0).unwrap() - 123.4).abs() < 1e-9);

        buf.set_fixed_s16(2, 1000.0, -1.5).unwrap();
        assert_eq!(buf.s16(2).unwrap(), -1500);

        // Saturating casts clamp out-of-range scalars.
        buf.set_fixed_u16(4, 100.0, -3.0).unwrap();
        assert_eq!(buf.u16(4).unwrap(), 0);
        buf.set_fixed_u16(4, 100.0, 1e9).unwrap();
        assert_eq!(buf.u16(4).unwrap(), u16::max_value());
    }

    #[test]
    fn test_scaled_remap_roundtrip() {
        let mut buf = ByteBuffer::new(8);

        buf.set_scaled_s16(0, (-9.0, 9.0), (-16000.0, 16000.0), 4.5).unwrap();
        assert_eq!(buf.s16(0).unwrap(), 8000);

        let back = buf.scaled_s16(0, (-16000.0, 16000.0), (-9.0, 9.0)).unwrap();
        assert!((back - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_strings() {
        let mut buf = ByteBuffer::new(16);

        buf.set_string(0, 8, "ATEM").unwrap();
        assert_eq!(&buf.raw()[..8], b"ATEM\0\0\0\0");
        assert_eq!(buf.string(0, 8).unwrap(), "ATEM");

        buf.set_string(0, 4, "television").unwrap();
        assert_eq!(buf.string(0, 4).unwrap(), "tele");

        assert!(buf.set_string(12, 8, "overflow").is_err());
    }

    #[test]
    fn test_map_value() {
        assert!((map_value(8000.0, -16000.0, 16000.0, -9.0, 9.0) - 4.5).abs() < 1e-9);
        assert!((map_value(0.0, -2048.0, 2048.0, 0.0, 1.0) - 0.5).abs() < 1e-9);
    }
}
