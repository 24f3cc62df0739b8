//! Canned AMF-side messages for scripting the transport.

use anyhow::Result;
use nas::{
    IdentityRequest, IdentityType, MmMessage, NasMessage, PduSessionEstablishmentAccept,
    PduSessionType, SmHeader, SmMessage, SscMode,
};
use ngap::{
    Cause, Criticality, NgapBuilder, NgapCodec, NgapPdu, PduDescription, ProcedureCode, TreeCodec,
};

pub struct MockAmf {
    pub amf_ue_ngap_id: u64,
    pub ran_ue_ngap_id: u32,
}

impl MockAmf {
    pub fn new(amf_ue_ngap_id: u64, ran_ue_ngap_id: u32) -> Self {
        MockAmf {
            amf_ue_ngap_id,
            ran_ue_ngap_id,
        }
    }

    pub fn downlink_nas(&self, nas: &NasMessage) -> Result<Vec<u8>> {
        self.downlink_raw_nas(nas::encode(nas)?)
    }

    /// Downlink NAS Transport carrying arbitrary octets as the NAS PDU.
    pub fn downlink_raw_nas(&self, nas_pdu: Vec<u8>) -> Result<Vec<u8>> {
        let pdu = NgapBuilder::new(
            PduDescription::InitiatingMessage,
            ProcedureCode::DownlinkNasTransport,
            Criticality::Ignore,
        )
        .add_amf_ue_ngap_id(self.amf_ue_ngap_id, Criticality::Reject)
        .add_ran_ue_ngap_id(self.ran_ue_ngap_id, Criticality::Reject)
        .add_nas_pdu(nas_pdu, Criticality::Reject)
        .build()?;
        self.encode(&pdu)
    }

    pub fn deregistration_accept(&self) -> Result<Vec<u8>> {
        self.downlink_nas(&NasMessage::Mm(
            MmMessage::DeregistrationAcceptUeOriginating(Default::default()),
        ))
    }

    pub fn ue_context_release_command(&self) -> Result<Vec<u8>> {
        let pdu = NgapBuilder::new(
            PduDescription::InitiatingMessage,
            ProcedureCode::UeContextRelease,
            Criticality::Reject,
        )
        .add_amf_ue_ngap_id(self.amf_ue_ngap_id, Criticality::Reject)
        .add_ie(
            ngap::ProtocolIeId::Cause,
            Criticality::Ignore,
            ngap::IeValue::Cause(Cause::Nas(0)),
        )
        .build()?;
        self.encode(&pdu)
    }

    pub fn pdu_session_establishment_accept(&self, pdu_session_id: u8, pti: u8) -> Result<Vec<u8>> {
        self.downlink_nas(&NasMessage::Sm(
            SmHeader {
                pdu_session_id,
                pti,
            },
            SmMessage::PduSessionEstablishmentAccept(PduSessionEstablishmentAccept {
                selected_pdu_session_type: PduSessionType::Ipv4,
                selected_ssc_mode: SscMode::Ssc1,
                authorized_qos_rules: vec![0x00, 0x06, 0x01, 0x20, 0x41, 0x01, 0x01, 0x09],
                session_ambr: vec![0x06, 0x01, 0x90, 0x06, 0x01, 0x90],
                sm_cause: None,
                pdu_address: Some(vec![0x01, 10, 1, 1, 1]),
            }),
        ))
    }

    /// A syntactically valid message that no flow expects in its wait
    /// states; used to exercise the discard policy.
    pub fn identity_request(&self) -> Result<Vec<u8>> {
        self.downlink_nas(&NasMessage::Mm(MmMessage::IdentityRequest(
            IdentityRequest {
                identity_type: IdentityType::Imei,
            },
        )))
    }

    fn encode(&self, pdu: &NgapPdu) -> Result<Vec<u8>> {
        Ok(TreeCodec.encode(pdu)?)
    }
}
