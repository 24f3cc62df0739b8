mod mm;
mod sm;

pub use mm::{
    DeregistrationAcceptUeOriginating, DeregistrationRequestUeOriginating, IdentityRequest,
    IdentityResponse,
};
pub use sm::{PduSessionEstablishmentAccept, PduSessionEstablishmentRequest};

use crate::enums::{MmMessageType, SecurityHeaderType, SmMessageType};

/// A decoded NAS message.
///
/// MM and SM messages differ in their header: an SM message carries the
/// PDU session identity and procedure transaction identity ahead of the
/// message type. A security-protected message wraps a complete inner
/// message behind the 5-byte security header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NasMessage {
    Mm(MmMessage),
    Sm(SmHeader, SmMessage),
    SecurityProtected(SecurityHeader, Box<NasMessage>),
}

/// Security header of a protected MM message: one sequence number octet
/// and a four-octet integrity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityHeader {
    pub security_header_type: SecurityHeaderType,
    pub sequence_number: u8,
    pub message_authentication_code: [u8; 4],
}

/// Header fields specific to 5GSM messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmHeader {
    pub pdu_session_id: u8,
    pub pti: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MmMessage {
    IdentityRequest(IdentityRequest),
    IdentityResponse(IdentityResponse),
    DeregistrationRequestUeOriginating(DeregistrationRequestUeOriginating),
    DeregistrationAcceptUeOriginating(DeregistrationAcceptUeOriginating),
}

impl MmMessage {
    pub fn message_type(&self) -> MmMessageType {
        match self {
            MmMessage::IdentityRequest(_) => MmMessageType::IdentityRequest,
            MmMessage::IdentityResponse(_) => MmMessageType::IdentityResponse,
            MmMessage::DeregistrationRequestUeOriginating(_) => {
                MmMessageType::DeregistrationRequestUeOriginating
            }
            MmMessage::DeregistrationAcceptUeOriginating(_) => {
                MmMessageType::DeregistrationAcceptUeOriginating
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmMessage {
    PduSessionEstablishmentRequest(PduSessionEstablishmentRequest),
    PduSessionEstablishmentAccept(PduSessionEstablishmentAccept),
}

impl SmMessage {
    pub fn message_type(&self) -> SmMessageType {
        match self {
            SmMessage::PduSessionEstablishmentRequest(_) => {
                SmMessageType::PduSessionEstablishmentRequest
            }
            SmMessage::PduSessionEstablishmentAccept(_) => {
                SmMessageType::PduSessionEstablishmentAccept
            }
        }
    }
}
