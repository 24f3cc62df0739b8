use crate::pdu::ProtocolIeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NgapError {
    #[error("duplicate protocol IE {id:?}")]
    DuplicateIe { id: ProtocolIeId },

    #[error("truncated {field}: needed {needed} more bytes, {remaining} remain")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("value {value:#x} is not a known {field}")]
    UnknownValue { field: &'static str, value: u64 },

    #[error("protocol IE {id:?} has a malformed value of length {length}")]
    MalformedIe { id: ProtocolIeId, length: usize },
}
