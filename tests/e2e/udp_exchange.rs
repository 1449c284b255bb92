//! Full request/response exchanges against workers wired the same way the
//! binary wires them: config -> answer source -> use case -> assembler -> UDP.

use authdns_application::services::SyntheticAnswerSource;
use authdns_application::use_cases::AnswerQueryUseCase;
use authdns_domain::{Config, RecordType, ResponseCode};
use authdns_infrastructure::dns::transport::{bind_udp_socket, run_udp_worker};
use authdns_infrastructure::dns::wire::decode_message;
use authdns_infrastructure::dns::{DnsServerHandler, MessageAssembler};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

const CONFIG: &str = r#"
    [server]
    bind_address = "127.0.0.1"
    dns_port = 2053

    [answer]
    address = "192.0.2.1"
    ttl = 300

    [logging]
    dump_packets = true
"#;

fn handler_from(config: &Config) -> Arc<DnsServerHandler> {
    let source = Arc::new(SyntheticAnswerSource::from_config(&config.answer));
    let use_case = Arc::new(AnswerQueryUseCase::new(source));
    Arc::new(
        DnsServerHandler::new(MessageAssembler::new(use_case))
            .with_packet_dump(config.logging.dump_packets),
    )
}

struct RunningServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    workers: JoinSet<()>,
}

impl RunningServer {
    async fn start(num_workers: usize) -> Self {
        let config: Config = toml::from_str(CONFIG).unwrap();
        let handler = handler_from(&config);
        let shutdown = CancellationToken::new();
        let mut workers = JoinSet::new();

        let first = bind_udp_socket("127.0.0.1:0".parse().unwrap(), num_workers > 1).unwrap();
        let addr = first.local_addr().unwrap();
        workers.spawn(run_udp_worker(first, handler.clone(), 0, shutdown.clone()));
        for worker_id in 1..num_workers {
            let socket = bind_udp_socket(addr, true).unwrap();
            workers.spawn(run_udp_worker(
                socket,
                handler.clone(),
                worker_id,
                shutdown.clone(),
            ));
        }

        Self {
            addr,
            shutdown,
            workers,
        }
    }

    async fn stop(mut self) {
        self.shutdown.cancel();
        while let Some(result) = self.workers.join_next().await {
            result.unwrap();
        }
    }
}

fn query(id: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&[0x01, 0x00]); // RD
    buf.extend_from_slice(&(questions.len() as u16).to_be_bytes());
    buf.extend_from_slice(&[0x00; 6]); // AN/NS/AR counts
    for (domain, qtype) in questions {
        for label in domain.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0x00);
        buf.extend_from_slice(&qtype.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x01]); // IN
    }
    buf
}

async fn ask(client: &UdpSocket, server: SocketAddr, request: &[u8]) -> Vec<u8> {
    client.send_to(request, server).await.unwrap();
    let mut buf = [0u8; 512];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("timed out waiting for response")
        .unwrap();
    buf[..len].to_vec()
}

#[tokio::test]
async fn test_a_query_gets_configured_answer() {
    let server = RunningServer::start(1).await;
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let bytes = ask(&client, server.addr, &query(0x1234, &[("codecrafters.io", 1)])).await;
    let response = decode_message(&bytes).unwrap();

    assert_eq!(response.id, 0x1234);
    assert!(response.flags.response);
    assert!(response.flags.authoritative);
    assert_eq!(response.questions.len(), 1);
    assert_eq!(response.answers.len(), 1);
    assert_eq!(response.answers[0].ttl, 300);
    assert_eq!(response.answers[0].ipv4(), Some(Ipv4Addr::new(192, 0, 2, 1)));

    server.stop().await;
}

#[tokio::test]
async fn test_mixed_questions_in_one_datagram() {
    let server = RunningServer::start(1).await;
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let request = query(
        7,
        &[
            ("abc.longassdomainname.com", 1),
            ("def.longassdomainname.com", 28),
            ("ghi.longassdomainname.com", 1),
        ],
    );
    let response = decode_message(&ask(&client, server.addr, &request).await).unwrap();

    assert_eq!(response.questions.len(), 3);
    assert_eq!(response.questions[1].qtype, RecordType::AAAA);
    assert_eq!(response.answers.len(), 2);
    assert!(response.answers.iter().all(|a| a.rtype == RecordType::A));

    server.stop().await;
}

#[tokio::test]
async fn test_sequential_clients_after_malformed_input() {
    let server = RunningServer::start(1).await;
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    let bad = decode_message(&ask(&client, server.addr, &[0x00, 0x2a, 0xff, 0xff, 0x00]).await)
        .unwrap();
    assert_eq!(bad.id, 0x002a);
    assert_eq!(bad.flags.response_code, ResponseCode::FormatError);

    for id in 0..10u16 {
        let bytes = ask(&client, server.addr, &query(id, &[("example.com", 1)])).await;
        let response = decode_message(&bytes).unwrap();
        assert_eq!(response.id, id);
        assert_eq!(response.answers.len(), 1);
    }

    server.stop().await;
}

#[cfg(unix)]
#[tokio::test]
async fn test_reuse_port_workers_share_the_address() {
    let server = RunningServer::start(3).await;
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();

    for id in 100..120u16 {
        let bytes = ask(&client, server.addr, &query(id, &[("codecrafters.io", 1)])).await;
        assert_eq!(decode_message(&bytes).unwrap().id, id);
    }

    server.stop().await;
}
