use super::name::{decode_name, encode_name, CompressionTable};
use super::{ByteReader, ByteWriter};
use authdns_domain::{Question, RecordClass, RecordType, WireError};

/// Decodes one question at `offset`, returning it and the offset after it.
pub fn decode_question(reader: &ByteReader<'_>, offset: usize) -> Result<(Question, usize), WireError> {
    let (name, consumed) = decode_name(reader, offset)?;
    let (qtype, pos) = reader.read_u16(offset + consumed)?;
    let (qclass, pos) = reader.read_u16(pos)?;

    Ok((
        Question::new(
            name,
            RecordType::from_u16(qtype),
            RecordClass::from_u16(qclass),
        ),
        pos,
    ))
}

pub fn encode_question(writer: &mut ByteWriter, question: &Question, table: &mut CompressionTable) {
    encode_name(writer, &question.name, table);
    writer.write_u16(question.qtype.to_u16());
    writer.write_u16(question.qclass.to_u16());
}
