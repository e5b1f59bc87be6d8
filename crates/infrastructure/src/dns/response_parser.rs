use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use std::net::IpAddr;
use tracing::debug;
use v6ready_domain::{DomainError, RecordType};

/// Parsed answer to one readiness probe.
#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub addresses: Vec<IpAddr>,
    pub rcode: ResponseCode,
}

impl DnsResponse {
    /// NOERROR with no address of the queried type (e.g. only CNAME
    /// hops in the answer section).
    pub fn is_nodata(&self) -> bool {
        self.rcode == ResponseCode::NoError && self.addresses.is_empty()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    pub fn is_server_error(&self) -> bool {
        matches!(
            self.rcode,
            ResponseCode::ServFail | ResponseCode::Refused | ResponseCode::NotImp
        )
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Extracts the answer addresses matching the queried record type;
    /// every other answer record is ignored.
    pub fn parse(response_bytes: &[u8], record_type: RecordType) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::DnsLookupFailed(format!("failed to parse DNS response: {e}"))
        })?;

        let rcode = message.response_code();
        let mut addresses = Vec::with_capacity(message.answers().len().min(8));

        for record in message.answers() {
            match record.data() {
                RData::A(a) if record_type == RecordType::A => {
                    addresses.push(IpAddr::V4(a.0));
                }
                RData::AAAA(aaaa) if record_type == RecordType::AAAA => {
                    addresses.push(IpAddr::V6(aaaa.0));
                }
                _ => {}
            }
        }

        debug!(
            rcode = ?rcode,
            addresses = addresses.len(),
            "DNS response parsed"
        );

        Ok(DnsResponse { addresses, rcode })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
