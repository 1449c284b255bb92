use crate::ports::AnswerSource;
use authdns_domain::{HeaderFlags, Message, OpCode, ResponseCode};
use std::sync::Arc;
use tracing::debug;

/// Response policy of the authoritative responder.
///
/// Turns a decoded query into the response message: questions are echoed,
/// every question gets one lookup against the [`AnswerSource`], and the
/// header is set up as an authoritative, non-recursive answer.
pub struct AnswerQueryUseCase {
    source: Arc<dyn AnswerSource>,
}

impl AnswerQueryUseCase {
    pub fn new(source: Arc<dyn AnswerSource>) -> Self {
        Self { source }
    }

    pub fn execute(&self, query: &Message) -> Message {
        let mut response = Message::new(
            query.id,
            Self::response_flags(&query.flags, ResponseCode::NoError),
        );
        response.questions = query.questions.clone();

        if query.is_response() {
            debug!(id = query.id, "QR bit set on incoming message, answering anyway");
        }

        if query.flags.opcode != OpCode::Query {
            debug!(id = query.id, opcode = %query.flags.opcode, "Unsupported opcode");
            response.flags.response_code = ResponseCode::NotImplemented;
            return response;
        }

        for question in &query.questions {
            let answers = self.source.answers_for(question);
            debug!(
                id = query.id,
                name = %question.name,
                qtype = %question.qtype,
                answers = answers.len(),
                "Question answered"
            );
            response.answers.extend(answers);
        }

        response
    }

    /// Header flags for a response to a request carrying `request` flags.
    pub fn response_flags(request: &HeaderFlags, response_code: ResponseCode) -> HeaderFlags {
        HeaderFlags {
            response: true,
            opcode: request.opcode,
            authoritative: true,
            truncated: false,
            recursion_desired: request.recursion_desired,
            recursion_available: false,
            z: 0,
            response_code,
        }
    }

    /// The minimal reply for a query that could not be decoded.
    ///
    /// `request` is `None` when not even the header was readable; only QR and
    /// RCODE are set in that case.
    pub fn format_error(id: u16, request: Option<&HeaderFlags>) -> Message {
        let flags = match request {
            Some(request) => HeaderFlags {
                authoritative: false,
                ..Self::response_flags(request, ResponseCode::FormatError)
            },
            None => HeaderFlags {
                response: true,
                response_code: ResponseCode::FormatError,
                ..Default::default()
            },
        };
        Message::new(id, flags)
    }
}
