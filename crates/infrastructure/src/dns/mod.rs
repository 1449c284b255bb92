pub mod assembler;
pub mod packet_dump;
pub mod server;
pub mod transport;
pub mod wire;

pub use assembler::MessageAssembler;
pub use packet_dump::HexDump;
pub use server::DnsServerHandler;
