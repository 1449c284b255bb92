use authdns_domain::WireError;
use bytes::{BufMut, Bytes, BytesMut};

/// Bounds-checked, position-explicit reader over a received message.
///
/// Every read takes an absolute offset and returns the value together with
/// the offset just past it. Reading past the end is `TruncatedInput`.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn read_u8(&self, pos: usize) -> Result<(u8, usize), WireError> {
        let ([b], next) = self.read_array::<1>(pos)?;
        Ok((b, next))
    }

    pub fn read_u16(&self, pos: usize) -> Result<(u16, usize), WireError> {
        let (bytes, next) = self.read_array::<2>(pos)?;
        Ok((u16::from_be_bytes(bytes), next))
    }

    pub fn read_u32(&self, pos: usize) -> Result<(u32, usize), WireError> {
        let (bytes, next) = self.read_array::<4>(pos)?;
        Ok((u32::from_be_bytes(bytes), next))
    }

    pub fn read_bytes(&self, pos: usize, len: usize) -> Result<(&'a [u8], usize), WireError> {
        let end = pos.checked_add(len).ok_or(WireError::TruncatedInput)?;
        self.buf
            .get(pos..end)
            .map(|slice| (slice, end))
            .ok_or(WireError::TruncatedInput)
    }

    fn read_array<const N: usize>(&self, pos: usize) -> Result<([u8; N], usize), WireError> {
        let (slice, next) = self.read_bytes(pos, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok((out, next))
    }
}

/// Append-only big-endian writer. `position()` is the offset the next byte
/// will land at, measured from the start of the message.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: BytesMut,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn position(&self) -> usize {
        self.buf.len()
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    pub fn write_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.put_u32(value);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}
