use super::header::{decode_header, encode_header};
use super::name::CompressionTable;
use super::question::{decode_question, encode_question};
use super::record::{decode_record, encode_record};
use super::{ByteReader, ByteWriter, HEADER_LEN, MAX_UDP_MESSAGE_SIZE};
use authdns_domain::{Header, Message, Question, ResourceRecord, WireError};
use bytes::Bytes;

/// Decodes a complete message. Bytes after the last declared record are ignored.
pub fn decode_message(buf: &[u8]) -> Result<Message, WireError> {
    let reader = ByteReader::new(buf);
    let header = decode_header(&reader)?;

    let (questions, pos) = decode_questions(&reader, HEADER_LEN, header.question_count)?;
    let (answers, pos) = decode_records(&reader, pos, header.answer_count)?;
    let (authorities, pos) = decode_records(&reader, pos, header.authority_count)?;
    let (additionals, _) = decode_records(&reader, pos, header.additional_count)?;

    Ok(Message {
        id: header.id,
        flags: header.flags,
        questions,
        answers,
        authorities,
        additionals,
    })
}

/// Decodes exactly `count` questions starting at `offset`.
pub fn decode_questions(
    reader: &ByteReader<'_>,
    offset: usize,
    count: u16,
) -> Result<(Vec<Question>, usize), WireError> {
    let mut questions = Vec::new();
    let mut pos = offset;
    for _ in 0..count {
        let (question, next) = decode_question(reader, pos)?;
        questions.push(question);
        pos = next;
    }
    Ok((questions, pos))
}

/// Decodes exactly `count` resource records starting at `offset`.
pub fn decode_records(
    reader: &ByteReader<'_>,
    offset: usize,
    count: u16,
) -> Result<(Vec<ResourceRecord>, usize), WireError> {
    let mut records = Vec::new();
    let mut pos = offset;
    for _ in 0..count {
        let (record, next) = decode_record(reader, pos)?;
        records.push(record);
        pos = next;
    }
    Ok((records, pos))
}

/// Encodes `message` with name compression across all sections.
pub fn encode_message(message: &Message) -> Result<Bytes, WireError> {
    encode_message_with(message, CompressionTable::new())
}

/// Encodes `message` using the given compression table.
///
/// Header counts always come from the section lengths.
pub fn encode_message_with(
    message: &Message,
    mut table: CompressionTable,
) -> Result<Bytes, WireError> {
    let header = Header {
        id: message.id,
        flags: message.flags,
        question_count: section_count(message.questions.len(), "question")?,
        answer_count: section_count(message.answers.len(), "answer")?,
        authority_count: section_count(message.authorities.len(), "authority")?,
        additional_count: section_count(message.additionals.len(), "additional")?,
    };

    let mut writer = ByteWriter::with_capacity(MAX_UDP_MESSAGE_SIZE);
    encode_header(&mut writer, &header);

    for question in &message.questions {
        encode_question(&mut writer, question, &mut table);
    }
    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        encode_record(&mut writer, record, &mut table)?;
    }

    Ok(writer.into_bytes())
}

fn section_count(len: usize, section: &'static str) -> Result<u16, WireError> {
    u16::try_from(len).map_err(|_| WireError::SectionTooLarge(section))
}
