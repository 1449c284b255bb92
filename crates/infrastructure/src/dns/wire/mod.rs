//! DNS message wire format (RFC 1035 §4).
//!
//! Decoding works on the raw datagram with absolute offsets so compression
//! pointers can be followed; encoding writes into a single growing buffer
//! whose positions double as compression offsets.

mod cursor;
mod header;
mod message;
mod name;
mod question;
mod record;

pub use cursor::{ByteReader, ByteWriter};
pub use header::{decode_header, encode_header};
pub use message::{
    decode_message, decode_questions, decode_records, encode_message, encode_message_with,
};
pub use name::{decode_name, encode_name, CompressionTable};
pub use question::{decode_question, encode_question};
pub use record::{decode_record, encode_record};

/// Fixed size of the message header.
pub const HEADER_LEN: usize = 12;

/// Largest message carried over plain UDP without EDNS(0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;
