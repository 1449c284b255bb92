use authdns_domain::CliOverrides;
use clap::Parser;
use std::net::Ipv4Addr;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "authdns")]
#[command(version)]
#[command(about = "authdns - minimal authoritative DNS responder over UDP")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// IPv4 address returned for every A/IN question
    #[arg(long, value_name = "IP")]
    answer_address: Option<Ipv4Addr>,

    /// TTL of synthesized answers, in seconds
    #[arg(long, value_name = "SECS")]
    answer_ttl: Option<u32>,

    /// Number of UDP workers
    #[arg(short = 'w', long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        num_workers: cli.workers,
        answer_address: cli.answer_address,
        answer_ttl: cli.answer_ttl,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    if let Some(path) = cli.write_config.as_deref() {
        return bootstrap::write_config(&config, path);
    }

    info!("Starting authdns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config);
    let socket_addr = config.server.socket_addr()?;
    let shutdown = CancellationToken::new();

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
        }
        ctrl_c_token.cancel();
    });

    server::start_dns_server(
        socket_addr,
        dns_services.handler,
        config.server.num_workers,
        shutdown,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
