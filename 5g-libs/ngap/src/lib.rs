//! NGAP (TS 38.413) message tree, builder and codec seam.

mod builder;
mod codec;
mod errors;
mod pdu;

pub use builder::NgapBuilder;
pub use codec::{NgapCodec, TreeCodec};
pub use errors::NgapError;
pub use pdu::{
    Cause, Criticality, IeValue, NgapPdu, NrCgi, PduDescription, ProcedureCode, ProtocolIe,
    ProtocolIeId, Tai, UserLocationInformationNr,
};
