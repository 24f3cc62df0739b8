//! NGAP PDU construction.

use crate::data::SimulationContext;
use ngap::{
    Criticality, NgapBuilder, NgapError, NgapPdu, PduDescription, ProcedureCode,
};

/// Uplink NAS Transport, TS 38.413 8.6.3.
pub fn uplink_nas_transport(
    ctx: &SimulationContext,
    nas_pdu: Vec<u8>,
) -> Result<NgapPdu, NgapError> {
    NgapBuilder::new(
        PduDescription::InitiatingMessage,
        ProcedureCode::UplinkNasTransport,
        Criticality::Ignore,
    )
    .add_amf_ue_ngap_id(ctx.amf_ue_ngap_id(), Criticality::Reject)
    .add_ran_ue_ngap_id(ctx.ran_ue_ngap_id(), Criticality::Reject)
    .add_nas_pdu(nas_pdu, Criticality::Reject)
    .add_user_location_information(ctx.user_location(), Criticality::Ignore)
    .build()
}

/// UE Context Release Complete, TS 38.413 8.3.3.
pub fn ue_context_release_complete(ctx: &SimulationContext) -> Result<NgapPdu, NgapError> {
    NgapBuilder::new(
        PduDescription::SuccessfulOutcome,
        ProcedureCode::UeContextRelease,
        Criticality::Reject,
    )
    .add_amf_ue_ngap_id(ctx.amf_ue_ngap_id(), Criticality::Ignore)
    .add_ran_ue_ngap_id(ctx.ran_ue_ngap_id(), Criticality::Ignore)
    .add_user_location_information(ctx.user_location(), Criticality::Ignore)
    .build()
}
