use authdns_domain::{AnswerConfig, Question, ResourceRecord};
use std::net::Ipv4Addr;

use crate::ports::AnswerSource;

/// Answers every A/IN question with the configured address, whatever the name.
#[derive(Debug, Clone)]
pub struct SyntheticAnswerSource {
    address: Ipv4Addr,
    ttl: u32,
}

impl SyntheticAnswerSource {
    pub fn new(address: Ipv4Addr, ttl: u32) -> Self {
        Self { address, ttl }
    }

    pub fn from_config(config: &AnswerConfig) -> Self {
        Self::new(config.address, config.ttl)
    }
}

impl AnswerSource for SyntheticAnswerSource {
    fn answers_for(&self, question: &Question) -> Vec<ResourceRecord> {
        if !question.is_internet_a() {
            return Vec::new();
        }
        vec![ResourceRecord::a(
            question.name.clone(),
            self.address,
            self.ttl,
        )]
    }
}
