use super::assembler::MessageAssembler;
use super::packet_dump::HexDump;
use super::wire::{decode_header, ByteReader};
use bytes::Bytes;
use std::net::SocketAddr;
use tracing::{debug, trace};

/// Per-datagram entry point shared by all UDP workers.
pub struct DnsServerHandler {
    assembler: MessageAssembler,
    dump_packets: bool,
}

impl DnsServerHandler {
    pub fn new(assembler: MessageAssembler) -> Self {
        Self {
            assembler,
            dump_packets: false,
        }
    }

    /// Logs a hex dump of every request and response at trace level.
    pub fn with_packet_dump(mut self, enabled: bool) -> Self {
        self.dump_packets = enabled;
        self
    }

    pub fn handle_datagram(&self, query: &[u8], client: SocketAddr) -> Bytes {
        if self.dump_packets {
            trace!(client = %client, len = query.len(), "Request\n{}", HexDump(query));
        }

        let response = self.assembler.build_response(query);

        if let Ok(header) = decode_header(&ByteReader::new(&response)) {
            debug!(
                client = %client,
                id = header.id,
                rcode = %header.flags.response_code,
                questions = header.question_count,
                answers = header.answer_count,
                truncated = header.flags.truncated,
                "Query answered"
            );
        }
        if self.dump_packets {
            trace!(client = %client, len = response.len(), "Response\n{}", HexDump(&response));
        }

        response
    }
}
