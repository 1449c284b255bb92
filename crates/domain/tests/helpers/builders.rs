#![allow(dead_code)]
use authdns_domain::{DomainName, RecordClass, RecordType, ResourceRecord};

pub fn name(text: &str) -> DomainName {
    text.parse().unwrap()
}

pub struct ResourceRecordBuilder {
    name: DomainName,
    rtype: RecordType,
    rclass: RecordClass,
    ttl: u32,
    rdata: Vec<u8>,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: name("example.com"),
            rtype: RecordType::A,
            rclass: RecordClass::IN,
            ttl: 300,
            rdata: vec![192, 0, 2, 1],
        }
    }

    pub fn name(mut self, text: &str) -> Self {
        self.name = name(text);
        self
    }

    pub fn rtype(mut self, rtype: RecordType) -> Self {
        self.rtype = rtype;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn rdata(mut self, rdata: &[u8]) -> Self {
        self.rdata = rdata.to_vec();
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.rtype, self.rclass, self.ttl, self.rdata)
    }
}
