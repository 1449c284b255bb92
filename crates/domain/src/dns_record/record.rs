use super::{RecordClass, RecordType};
use crate::DomainName;
use std::net::Ipv4Addr;

/// A resource record with its RDATA kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub rtype: RecordType,

    pub rclass: RecordClass,

    pub ttl: u32,

    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn new(
        name: DomainName,
        rtype: RecordType,
        rclass: RecordClass,
        ttl: u32,
        rdata: Vec<u8>,
    ) -> Self {
        Self {
            name,
            rtype,
            rclass,
            ttl,
            rdata,
        }
    }

    pub fn a(name: DomainName, address: Ipv4Addr, ttl: u32) -> Self {
        Self::new(
            name,
            RecordType::A,
            RecordClass::IN,
            ttl,
            address.octets().to_vec(),
        )
    }

    /// The address carried by an A record, if this is one with well-formed RDATA.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        if self.rtype != RecordType::A {
            return None;
        }
        let octets: [u8; 4] = self.rdata.as_slice().try_into().ok()?;
        Some(Ipv4Addr::from(octets))
    }

    pub fn has_valid_rdata_len(&self) -> bool {
        self.rtype
            .expected_rdata_len()
            .map_or(true, |expected| expected == self.rdata.len())
    }
}
