//! Constructs DNS query messages in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as WireRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use v6ready_domain::{DomainError, RecordType};

/// Builds DNS query messages in wire format.
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a standard recursive query (random ID, RD flag, single IN
    /// question) and serialize it to wire format bytes.
    pub fn build_query(domain: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(domain)
            .map_err(|e| DomainError::InvalidHostName(format!("'{domain}': {e}")))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(to_wire_type(record_type));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::DnsLookupFailed(format!("failed to serialize DNS message: {e}"))
        })?;

        Ok(buf)
    }
}

fn to_wire_type(record_type: RecordType) -> WireRecordType {
    match record_type {
        RecordType::A => WireRecordType::A,
        RecordType::AAAA => WireRecordType::AAAA,
    }
}
