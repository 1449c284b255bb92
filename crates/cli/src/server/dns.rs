use authdns_infrastructure::dns::transport::{bind_udp_socket, run_udp_worker};
use authdns_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Runs `num_workers` UDP workers on `socket_addr` until `shutdown` fires.
///
/// Each worker gets its own `SO_REUSEPORT` socket; all of them share `handler`.
pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: Arc<DnsServerHandler>,
    num_workers: usize,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let reuse_port = num_workers > 1;
    info!(bind_address = %socket_addr, num_workers, reuse_port, "Starting DNS server");

    let mut join_set: JoinSet<()> = JoinSet::new();
    for worker_id in 0..num_workers {
        let socket = match bind_udp_socket(socket_addr, reuse_port) {
            Ok(socket) => socket,
            Err(e) => {
                shutdown.cancel();
                while join_set.join_next().await.is_some() {}
                return Err(anyhow::anyhow!(
                    "failed to bind UDP socket {} for worker {}: {}",
                    socket_addr,
                    worker_id,
                    e
                ));
            }
        };
        join_set.spawn(run_udp_worker(
            socket,
            handler.clone(),
            worker_id,
            shutdown.clone(),
        ));
    }

    info!(bind_address = %socket_addr, num_workers, "DNS server ready");

    supervise_workers(join_set, &shutdown).await?;

    info!("DNS server stopped");
    Ok(())
}

/// Waits for every worker to finish.
///
/// Workers only return once `shutdown` is cancelled; any other exit, panic
/// included, cancels the remaining workers and is reported as an error.
async fn supervise_workers(
    mut join_set: JoinSet<()>,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    let mut failure: Option<String> = None;

    while let Some(result) = join_set.join_next().await {
        if shutdown.is_cancelled() {
            if let Err(e) = result {
                error!(error = %e, "UDP worker task failed during shutdown");
            }
            continue;
        }

        let reason = match result {
            Ok(()) => "worker exited".to_string(),
            Err(e) => e.to_string(),
        };
        error!(error = %reason, "UDP worker stopped unexpectedly, shutting down");
        failure.get_or_insert(reason);
        shutdown.cancel();
    }

    match failure {
        Some(reason) => Err(anyhow::anyhow!("UDP worker stopped unexpectedly: {}", reason)),
        None => Ok(()),
    }
}
