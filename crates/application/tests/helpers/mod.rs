mod mock_answer_source;

pub use mock_answer_source::*;
