#![allow(dead_code)]
use chrono::NaiveDate;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use hickory_server::ServerFuture;
use literal_dns_application::ports::Clock;
use literal_dns_application::use_cases::ResolveLiteralUseCase;
use literal_dns_domain::{NegativeResponse, ZoneConfig};
use literal_dns_infrastructure::dns::LiteralRequestHandler;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
    }
}

pub fn use_case(policy: NegativeResponse, clock: FixedClock) -> Arc<ResolveLiteralUseCase> {
    let zone = ZoneConfig::new("ipv6-literal", "ipv6-literal.", None)
        .unwrap()
        .with_negative_response(policy);
    Arc::new(ResolveLiteralUseCase::new(Arc::new(zone), Arc::new(clock)))
}

/// A literal server on ephemeral loopback ports.
pub struct LiteralTestServer {
    server: ServerFuture<LiteralRequestHandler>,
    pub udp_addr: SocketAddr,
    pub tcp_addr: SocketAddr,
}

impl LiteralTestServer {
    pub async fn start() -> Self {
        Self::start_with(NegativeResponse::NxDomain).await
    }

    pub async fn start_with(policy: NegativeResponse) -> Self {
        Self::start_with_clock(policy, FixedClock::default()).await
    }

    pub async fn start_with_clock(policy: NegativeResponse, clock: FixedClock) -> Self {
        let handler = LiteralRequestHandler::new(use_case(policy, clock));
        let mut server = ServerFuture::new(handler);

        let udp_socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let udp_addr = udp_socket.local_addr().unwrap();
        server.register_socket(udp_socket);

        let tcp_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let tcp_addr = tcp_listener.local_addr().unwrap();
        server.register_listener(tcp_listener, Duration::from_secs(5));

        Self {
            server,
            udp_addr,
            tcp_addr,
        }
    }

    pub async fn query_udp(&self, name: &str, record_type: RecordType) -> Message {
        self.send_udp(&build_query(name, record_type)).await
    }

    /// Sends an already encoded message and decodes the reply.
    pub async fn send_udp(&self, wire: &[u8]) -> Message {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.send_to(wire, self.udp_addr).await.unwrap();

        let mut buf = vec![0u8; 4096];
        let (len, _) = tokio::time::timeout(Duration::from_secs(5), socket.recv_from(&mut buf))
            .await
            .expect("UDP response timed out")
            .unwrap();
        Message::from_vec(&buf[..len]).unwrap()
    }

    pub async fn query_tcp(&self, name: &str, record_type: RecordType) -> Message {
        let mut stream = TcpStream::connect(self.tcp_addr).await.unwrap();
        let query = build_query(name, record_type);

        let mut framed = (query.len() as u16).to_be_bytes().to_vec();
        framed.extend_from_slice(&query);
        stream.write_all(&framed).await.unwrap();

        let mut len_buf = [0u8; 2];
        tokio::time::timeout(Duration::from_secs(5), stream.read_exact(&mut len_buf))
            .await
            .expect("TCP response timed out")
            .unwrap();
        let mut buf = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream.read_exact(&mut buf).await.unwrap();
        Message::from_vec(&buf).unwrap()
    }

    pub async fn shutdown(mut self) {
        self.server.shutdown_gracefully().await.unwrap();
    }
}

/// A query header with no question section.
pub fn empty_query() -> Message {
    let mut message = Message::new();
    message
        .set_id(0x2a2a)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(false);
    message
}

fn build_query(name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = empty_query();
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message.to_vec().unwrap()
}
