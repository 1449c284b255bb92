use authdns_domain::{Question, ResourceRecord};

/// Supplies the answer records for a single question.
///
/// Implementations must be cheap and non-blocking: they are called inline
/// while a datagram is being answered, possibly from several workers at once.
pub trait AnswerSource: Send + Sync {
    /// Returns the answers for `question`; an empty vector means no data.
    fn answers_for(&self, question: &Question) -> Vec<ResourceRecord>;
}
