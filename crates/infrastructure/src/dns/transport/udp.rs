//! UDP listener for DNS queries (RFC 1035 §4.2.1).
//!
//! Messages are carried as-is, one per datagram, limited to 512 bytes.
//! Every worker owns its socket and receive buffer; with `SO_REUSEPORT`
//! the kernel spreads datagrams across the workers' sockets.

use crate::dns::server::DnsServerHandler;
use crate::dns::wire::MAX_UDP_MESSAGE_SIZE;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const SOCKET_BUFFER_SIZE: usize = 256 * 1024;

/// Binds a non-blocking UDP socket on `addr`.
///
/// With `reuse_port` several sockets may share the address (Unix only).
/// Must be called from within a tokio runtime.
pub fn bind_udp_socket(addr: SocketAddr, reuse_port: bool) -> io::Result<UdpSocket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(reuse_port)?;
    #[cfg(not(unix))]
    let _ = reuse_port;
    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

/// Receives, answers and replies to datagrams until `shutdown` is cancelled.
///
/// Each datagram is handled to completion before the next is read. Receive
/// and send errors are logged and the loop carries on.
pub async fn run_udp_worker(
    socket: UdpSocket,
    handler: Arc<DnsServerHandler>,
    worker_id: usize,
    shutdown: CancellationToken,
) {
    let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

    if let Ok(local) = socket.local_addr() {
        debug!(worker = worker_id, local = %local, "UDP worker listening");
    }

    loop {
        let (len, from) = tokio::select! {
            _ = shutdown.cancelled() => {
                info!(worker = worker_id, "UDP worker stopping");
                break;
            }
            received = socket.recv_from(&mut recv_buf) => match received {
                Ok(received) => received,
                Err(e) => {
                    warn!(worker = worker_id, error = %e, "UDP recv error");
                    continue;
                }
            },
        };

        let response = handler.handle_datagram(&recv_buf[..len], from);

        match socket.send_to(&response, from).await {
            Ok(sent) if sent < response.len() => {
                warn!(worker = worker_id, client = %from, sent, len = response.len(), "Short UDP send");
            }
            Ok(_) => {}
            Err(e) => {
                error!(worker = worker_id, client = %from, error = %e, "Failed to send response");
            }
        }
    }
}
