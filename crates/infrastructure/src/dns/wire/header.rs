use super::{ByteReader, ByteWriter, HEADER_LEN};
use authdns_domain::{Header, HeaderFlags, WireError};

pub fn decode_header(reader: &ByteReader<'_>) -> Result<Header, WireError> {
    if reader.len() < HEADER_LEN {
        return Err(WireError::TruncatedInput);
    }
    let (id, pos) = reader.read_u16(0)?;
    let (flags, pos) = reader.read_u16(pos)?;
    let (question_count, pos) = reader.read_u16(pos)?;
    let (answer_count, pos) = reader.read_u16(pos)?;
    let (authority_count, pos) = reader.read_u16(pos)?;
    let (additional_count, _) = reader.read_u16(pos)?;

    Ok(Header {
        id,
        flags: HeaderFlags::from_u16(flags),
        question_count,
        answer_count,
        authority_count,
        additional_count,
    })
}

pub fn encode_header(writer: &mut ByteWriter, header: &Header) {
    writer.write_u16(header.id);
    writer.write_u16(header.flags.to_u16());
    writer.write_u16(header.question_count);
    writer.write_u16(header.answer_count);
    writer.write_u16(header.authority_count);
    writer.write_u16(header.additional_count);
}
