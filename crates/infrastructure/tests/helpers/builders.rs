#![allow(dead_code)]
use authdns_application::services::SyntheticAnswerSource;
use authdns_application::use_cases::AnswerQueryUseCase;
use authdns_domain::DomainName;
use authdns_infrastructure::dns::MessageAssembler;
use std::net::Ipv4Addr;
use std::sync::Arc;

pub const ANSWER_IP: Ipv4Addr = Ipv4Addr::new(8, 8, 8, 8);
pub const ANSWER_TTL: u32 = 60;

pub fn name(s: &str) -> DomainName {
    s.parse().unwrap()
}

pub fn synthetic_assembler() -> MessageAssembler {
    let source = Arc::new(SyntheticAnswerSource::new(ANSWER_IP, ANSWER_TTL));
    MessageAssembler::new(Arc::new(AnswerQueryUseCase::new(source)))
}

/// Raw query datagram built byte by byte, independent of the encoder.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16, u16)>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100, // RD
            questions: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, domain: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((domain.to_string(), qtype, qclass));
        self
    }

    pub fn a_question(self, domain: &str) -> Self {
        self.question(domain, 1, 1)
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&(self.questions.len() as u16).to_be_bytes()); // QDCOUNT
        buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT
        buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT
        for (domain, qtype, qclass) in &self.questions {
            for label in domain.split('.').filter(|l| !l.is_empty()) {
                buf.push(label.len() as u8);
                buf.extend_from_slice(label.as_bytes());
            }
            buf.push(0x00); // root label
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }
        buf
    }
}

pub fn u16_at(buf: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([buf[pos], buf[pos + 1]])
}
