use crate::{HeaderFlags, Question, ResourceRecord};

/// A complete DNS message.
///
/// Section counts are not stored: the encoder derives them from the section
/// lengths, so a `Message` can never carry a count that disagrees with its
/// contents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub id: u16,
    pub flags: HeaderFlags,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(id: u16, flags: HeaderFlags) -> Self {
        Self {
            id,
            flags,
            ..Default::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags.response
    }
}
