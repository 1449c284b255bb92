use super::wire::{
    decode_header, decode_questions, encode_header, encode_message, ByteReader, ByteWriter,
    HEADER_LEN, MAX_UDP_MESSAGE_SIZE,
};
use authdns_application::use_cases::AnswerQueryUseCase;
use authdns_domain::{Header, HeaderFlags, Message, ResponseCode, WireError};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// A query that could not be decoded, with whatever header data survived.
struct RejectedQuery {
    id: u16,
    flags: Option<HeaderFlags>,
    error: WireError,
}

/// Turns raw query datagrams into raw response datagrams.
///
/// Never fails: undecodable input gets a FORMERR reply, a response that
/// cannot be encoded gets SERVFAIL, and a response over the size limit is
/// truncated with TC set.
pub struct MessageAssembler {
    use_case: Arc<AnswerQueryUseCase>,
    max_message_size: usize,
}

impl MessageAssembler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self {
            use_case,
            max_message_size: MAX_UDP_MESSAGE_SIZE,
        }
    }

    pub fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size.max(HEADER_LEN);
        self
    }

    pub fn build_response(&self, query: &[u8]) -> Bytes {
        let response = match parse_query(query) {
            Ok(request) => self.use_case.execute(&request),
            Err(rejected) => {
                debug!(
                    id = rejected.id,
                    len = query.len(),
                    error = %rejected.error,
                    "Malformed query"
                );
                AnswerQueryUseCase::format_error(rejected.id, rejected.flags.as_ref())
            }
        };
        self.encode_response(response)
    }

    fn encode_response(&self, mut response: Message) -> Bytes {
        let bytes = match encode_message(&response) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(id = response.id, error = %e, "Failed to encode response, answering SERVFAIL");
                drop_records(&mut response);
                response.flags.response_code = ResponseCode::ServerFailure;
                encode_or_header_only(&response)
            }
        };
        if bytes.len() <= self.max_message_size {
            return bytes;
        }

        warn!(
            id = response.id,
            size = bytes.len(),
            limit = self.max_message_size,
            "Response too large, truncating"
        );
        response.flags.truncated = true;
        drop_records(&mut response);
        let bytes = encode_or_header_only(&response);
        if bytes.len() <= self.max_message_size {
            return bytes;
        }

        response.questions.clear();
        encode_or_header_only(&response)
    }
}

/// Decodes the header and exactly QDCOUNT questions. Other sections of a
/// query are not looked at.
fn parse_query(query: &[u8]) -> Result<Message, RejectedQuery> {
    let reader = ByteReader::new(query);
    let header = decode_header(&reader).map_err(|error| RejectedQuery {
        id: leading_id(query),
        flags: None,
        error,
    })?;
    let (questions, _) =
        decode_questions(&reader, HEADER_LEN, header.question_count).map_err(|error| {
            RejectedQuery {
                id: header.id,
                flags: Some(header.flags),
                error,
            }
        })?;

    Ok(Message {
        questions,
        ..Message::new(header.id, header.flags)
    })
}

fn leading_id(query: &[u8]) -> u16 {
    match query {
        [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
        _ => 0,
    }
}

fn drop_records(response: &mut Message) {
    response.answers.clear();
    response.authorities.clear();
    response.additionals.clear();
}

fn encode_or_header_only(response: &Message) -> Bytes {
    encode_message(response).unwrap_or_else(|_| {
        let mut writer = ByteWriter::with_capacity(HEADER_LEN);
        encode_header(
            &mut writer,
            &Header {
                id: response.id,
                flags: response.flags,
                ..Default::default()
            },
        );
        writer.into_bytes()
    })
}
