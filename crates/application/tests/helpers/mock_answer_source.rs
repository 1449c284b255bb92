#![allow(dead_code)]

use authdns_application::ports::AnswerSource;
use authdns_domain::{DomainName, Question, ResourceRecord};
use std::collections::HashMap;
use std::sync::Mutex;

/// Answer source with canned answers per name that records every lookup.
pub struct MockAnswerSource {
    answers: Mutex<HashMap<String, Vec<ResourceRecord>>>,
    lookups: Mutex<Vec<Question>>,
}

impl MockAnswerSource {
    pub fn new() -> Self {
        Self {
            answers: Mutex::new(HashMap::new()),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn set_answers(&self, name: &str, records: Vec<ResourceRecord>) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.to_string(), records);
    }

    pub fn lookups(&self) -> Vec<Question> {
        self.lookups.lock().unwrap().clone()
    }
}

impl AnswerSource for MockAnswerSource {
    fn answers_for(&self, question: &Question) -> Vec<ResourceRecord> {
        self.lookups.lock().unwrap().push(question.clone());
        self.answers
            .lock()
            .unwrap()
            .get(&question.name.to_string())
            .cloned()
            .unwrap_or_default()
    }
}

pub fn name(text: &str) -> DomainName {
    text.parse().unwrap()
}
