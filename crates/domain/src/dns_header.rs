use crate::{OpCode, ResponseCode};

/// The 16-bit flags word of the message header.
///
/// ```text
///   15 | 14..11 | 10 |  9 |  8 |  7 |  6..4 |  3..0
///   QR | OPCODE | AA | TC | RD | RA |   Z   | RCODE
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub response: bool,
    pub opcode: OpCode,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    /// Reserved bits, kept so a decoded header re-encodes unchanged.
    pub z: u8,
    pub response_code: ResponseCode,
}

impl HeaderFlags {
    pub fn to_u16(&self) -> u16 {
        let mut flags: u16 = 0;
        if self.response {
            flags |= 1 << 15;
        }
        flags |= (self.opcode.to_u8() as u16 & 0xF) << 11;
        if self.authoritative {
            flags |= 1 << 10;
        }
        if self.truncated {
            flags |= 1 << 9;
        }
        if self.recursion_desired {
            flags |= 1 << 8;
        }
        if self.recursion_available {
            flags |= 1 << 7;
        }
        flags |= (self.z as u16 & 0x7) << 4;
        flags |= self.response_code.to_u8() as u16 & 0xF;
        flags
    }

    pub fn from_u16(flags: u16) -> Self {
        Self {
            response: flags & (1 << 15) != 0,
            opcode: OpCode::from_u8(((flags >> 11) & 0xF) as u8),
            authoritative: flags & (1 << 10) != 0,
            truncated: flags & (1 << 9) != 0,
            recursion_desired: flags & (1 << 8) != 0,
            recursion_available: flags & (1 << 7) != 0,
            z: ((flags >> 4) & 0x7) as u8,
            response_code: ResponseCode::from_u8((flags & 0xF) as u8),
        }
    }
}

/// The fixed 12-byte header exactly as it sits on the wire, counts included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}
