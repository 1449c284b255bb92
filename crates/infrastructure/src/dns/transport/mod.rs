pub mod udp;

pub use udp::{bind_udp_socket, run_udp_worker};
