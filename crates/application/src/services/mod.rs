mod synthetic_answer_source;

pub use synthetic_answer_source::SyntheticAnswerSource;
