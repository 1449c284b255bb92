use super::{ByteReader, ByteWriter};
use authdns_domain::{DomainName, WireError, MAX_LABEL_LEN};
use std::collections::HashMap;

const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;
const MAX_POINTER_OFFSET: usize = 0x3FFF;

/// Decodes a possibly compressed name starting at `offset`.
///
/// Returns the name and the number of bytes it occupies at `offset`; when a
/// pointer is followed only the two pointer bytes count. A pointer must
/// target a position strictly before the label run that contains it, which
/// rules out self-reference and cycles while still allowing chains.
pub fn decode_name(reader: &ByteReader<'_>, offset: usize) -> Result<(DomainName, usize), WireError> {
    let mut name = DomainName::root();
    let mut pos = offset;
    let mut run_start = offset;
    let mut consumed = None;

    loop {
        let (len, next) = reader.read_u8(pos)?;

        if len & POINTER_TAG == POINTER_TAG {
            let (raw, after) = reader.read_u16(pos)?;
            let target = usize::from(raw & POINTER_OFFSET_MASK);
            if target >= run_start {
                return Err(WireError::InvalidPointer {
                    pointer: pos,
                    target,
                });
            }
            // Only the first pointer sits at the original position; later
            // ones lie behind `offset`.
            if consumed.is_none() {
                consumed = Some(after - offset);
            }
            pos = target;
            run_start = target;
            continue;
        }

        if len == 0 {
            return Ok((name, consumed.unwrap_or_else(|| next - offset)));
        }

        // 0x40 and 0x80 prefixes are reserved; they read as oversized labels.
        let len = usize::from(len);
        if len > MAX_LABEL_LEN {
            return Err(WireError::LabelTooLong(len));
        }
        let (label, after) = reader.read_bytes(next, len)?;
        name.push_label(label)?;
        pos = after;
    }
}

/// Offsets of names already written in the message being encoded.
///
/// Keys are compared byte-exactly, so a suffix is only reused when its
/// label bytes match.
#[derive(Debug)]
pub struct CompressionTable {
    offsets: HashMap<DomainName, u16>,
    enabled: bool,
}

impl CompressionTable {
    pub fn new() -> Self {
        Self {
            offsets: HashMap::new(),
            enabled: true,
        }
    }

    /// A table that never records nor returns offsets.
    pub fn disabled() -> Self {
        Self {
            offsets: HashMap::new(),
            enabled: false,
        }
    }

    pub fn lookup(&self, suffix: &DomainName) -> Option<u16> {
        self.offsets.get(suffix).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    fn record(&mut self, suffix: DomainName, offset: usize) {
        if !self.enabled || offset > MAX_POINTER_OFFSET {
            return;
        }
        if let Ok(offset) = u16::try_from(offset) {
            self.offsets.entry(suffix).or_insert(offset);
        }
    }
}

impl Default for CompressionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes `name`, replacing the longest already-written suffix with a pointer.
///
/// Every suffix emitted verbatim is recorded so later names can point at it.
pub fn encode_name(writer: &mut ByteWriter, name: &DomainName, table: &mut CompressionTable) {
    for (skip, label) in name.labels().enumerate() {
        let suffix = name.suffix(skip);
        if let Some(offset) = table.lookup(&suffix) {
            writer.write_u16((u16::from(POINTER_TAG) << 8) | offset);
            return;
        }
        table.record(suffix, writer.position());
        // Labels are bounded to 63 bytes by DomainName.
        writer.write_u8(label.len() as u8);
        writer.write_bytes(label);
    }
    writer.write_u8(0);
}
