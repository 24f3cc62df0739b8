//! Typed NGAP PDU tree.
//!
//! This is the pre-encoding form handed to the ASN.1 PER codec: a PDU
//! description, the elementary procedure it belongs to, and an ordered
//! list of criticality-tagged protocol IEs, one of which may carry an
//! embedded NAS message as opaque octets.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// NGAP-PDU choice, TS 38.413 9.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PduDescription {
    InitiatingMessage = 0,
    SuccessfulOutcome = 1,
    UnsuccessfulOutcome = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Criticality {
    Reject = 0,
    Ignore = 1,
    Notify = 2,
}

/// Elementary procedure codes, TS 38.413 9.4 (subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum ProcedureCode {
    DownlinkNasTransport = 4,
    InitialUeMessage = 15,
    NgSetup = 21,
    UeContextRelease = 41,
    UeContextReleaseRequest = 42,
    UplinkNasTransport = 46,
}

/// Protocol IE ids, TS 38.413 9.4 (subset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum ProtocolIeId {
    AmfUeNgapId = 0,
    Cause = 15,
    NasPdu = 38,
    RanUeNgapId = 85,
    RrcEstablishmentCause = 90,
    UserLocationInformation = 121,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IeValue {
    AmfUeNgapId(u64),
    RanUeNgapId(u32),
    NasPdu(Vec<u8>),
    Cause(Cause),
    RrcEstablishmentCause(u8),
    UserLocationInformation(UserLocationInformationNr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    RadioNetwork(u8),
    Transport(u8),
    Nas(u8),
    Protocol(u8),
    Misc(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserLocationInformationNr {
    pub nr_cgi: NrCgi,
    pub tai: Tai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NrCgi {
    pub plmn: [u8; 3],
    /// 36-bit NR cell identity, right-aligned.
    pub nr_cell_identity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tai {
    pub plmn: [u8; 3],
    pub tac: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolIe {
    pub id: ProtocolIeId,
    pub criticality: Criticality,
    pub value: IeValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgapPdu {
    pub description: PduDescription,
    pub procedure: ProcedureCode,
    pub criticality: Criticality,
    pub ies: Vec<ProtocolIe>,
}

impl NgapPdu {
    pub fn ie(&self, id: ProtocolIeId) -> Option<&IeValue> {
        self.ies.iter().find(|ie| ie.id == id).map(|ie| &ie.value)
    }

    /// The embedded NAS message, when this PDU carries one.
    pub fn nas_pdu(&self) -> Option<&[u8]> {
        match self.ie(ProtocolIeId::NasPdu) {
            Some(IeValue::NasPdu(bytes)) => Some(bytes),
            _ => None,
        }
    }
}
