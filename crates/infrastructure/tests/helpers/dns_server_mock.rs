#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::{HashMap, HashSet};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Scripted answers for the mock server, keyed by FQDN + record type.
/// Names without a scripted answer get NODATA; names registered as
/// nonexistent get NXDOMAIN.
#[derive(Default, Clone)]
pub struct Zone {
    answers: HashMap<(String, WireRecordType), Vec<IpAddr>>,
    nonexistent: HashSet<String>,
}

impl Zone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, record_type: WireRecordType, addresses: &[&str]) -> Self {
        let parsed = addresses
            .iter()
            .map(|a| IpAddr::from_str(a).unwrap())
            .collect();
        self.answers.insert((fqdn(name), record_type), parsed);
        self
    }

    pub fn nxdomain(mut self, name: &str) -> Self {
        self.nonexistent.insert(fqdn(name));
        self
    }

    fn respond(&self, query: &Message) -> Option<Vec<u8>> {
        let question = query.queries().first()?.clone();
        let qname = question.name().to_string().to_ascii_lowercase();

        let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
        response.set_recursion_desired(true);
        response.set_recursion_available(true);
        response.add_query(question.clone());

        if self.nonexistent.contains(&qname) {
            response.set_response_code(ResponseCode::NXDomain);
        } else if let Some(addresses) = self.answers.get(&(qname, question.query_type())) {
            for address in addresses {
                let rdata = match address {
                    IpAddr::V4(v4) => RData::A(A(*v4)),
                    IpAddr::V6(v6) => RData::AAAA(AAAA(*v6)),
                };
                response.add_answer(Record::from_rdata(question.name().clone(), 60, rdata));
            }
        }

        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);
        response.emit(&mut encoder).ok()?;
        Some(buf)
    }
}

fn fqdn(name: &str) -> String {
    let mut fqdn = name.to_ascii_lowercase();
    if !fqdn.ends_with('.') {
        fqdn.push('.');
    }
    fqdn
}

/// In-process DNS server answering from a scripted [`Zone`].
pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds an ephemeral localhost port and serves until dropped.
    pub async fn start(zone: Zone) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { break };
                        if let Ok(query) = Message::from_vec(&buf[..len]) {
                            if let Some(response) = zone.respond(&query) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
