//! 5GSM message bodies (TS 24.501, section 8.3).

use crate::codec::{Reader, skip_unknown_ie};
use crate::enums::{PduSessionType, SmCause, SscMode};
use crate::errors::NasError;

// IEIs of the optional IEs decoded here.
const IEI_PDU_SESSION_TYPE: u8 = 0x9; // half octet
const IEI_SSC_MODE: u8 = 0xa; // half octet
const IEI_SM_CAPABILITY: u8 = 0x28; // TLV
const IEI_PDU_ADDRESS: u8 = 0x29; // TLV
const IEI_SM_CAUSE: u8 = 0x59; // TV, one value octet

/// PDU Session Establishment Request, TS 24.501 8.3.1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduSessionEstablishmentRequest {
    /// Integrity protection maximum data rate, TS 24.501 9.11.4.7
    /// (uplink octet, downlink octet). Mandatory, fixed format.
    pub integrity_protection_maximum_data_rate: [u8; 2],
    pub pdu_session_type: Option<PduSessionType>,
    pub ssc_mode: Option<SscMode>,
    /// 5GSM capability, TS 24.501 9.11.4.1. Opaque TLV payload.
    pub sm_capability: Option<Vec<u8>>,
}

impl PduSessionEstablishmentRequest {
    pub(crate) fn encode_ies(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.integrity_protection_maximum_data_rate);
        if let Some(pdu_session_type) = self.pdu_session_type {
            out.push((IEI_PDU_SESSION_TYPE << 4) | pdu_session_type.value());
        }
        if let Some(ssc_mode) = self.ssc_mode {
            out.push((IEI_SSC_MODE << 4) | ssc_mode.value());
        }
        if let Some(capability) = &self.sm_capability {
            out.push(IEI_SM_CAPABILITY);
            out.push(capability.len() as u8);
            out.extend_from_slice(capability);
        }
    }

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        r.require(
            "PDU Session Establishment Request",
            "Integrity protection maximum data rate",
        )?;
        let integrity_protection_maximum_data_rate =
            r.read_fixed::<2>("integrity protection maximum data rate")?;

        let mut message = PduSessionEstablishmentRequest {
            integrity_protection_maximum_data_rate,
            pdu_session_type: None,
            ssc_mode: None,
            sm_capability: None,
        };
        while !r.is_empty() {
            let iei = r.read_u8("information element identifier")?;
            match iei >> 4 {
                IEI_PDU_SESSION_TYPE => {
                    message.pdu_session_type = Some(PduSessionType::from_value(iei & 0x0f)?)
                }
                IEI_SSC_MODE => message.ssc_mode = Some(SscMode::from_value(iei & 0x0f)?),
                _ => match iei {
                    IEI_SM_CAPABILITY => {
                        let len = r.read_u8("5GSM capability length")? as usize;
                        message.sm_capability = Some(r.read_vec(len, "5GSM capability")?);
                    }
                    other => skip_unknown_ie(r, other)?,
                },
            }
        }
        Ok(message)
    }
}

/// PDU Session Establishment Accept, TS 24.501 8.3.2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduSessionEstablishmentAccept {
    /// Selected PDU session type and selected SSC mode share one octet
    /// (type in the low nibble, SSC mode in the high nibble).
    pub selected_pdu_session_type: PduSessionType,
    pub selected_ssc_mode: SscMode,
    /// Authorized QoS rules, TS 24.501 9.11.4.13. Opaque, LV-E encoded.
    pub authorized_qos_rules: Vec<u8>,
    /// Session AMBR, TS 24.501 9.11.4.14. Opaque, LV encoded.
    pub session_ambr: Vec<u8>,
    pub sm_cause: Option<SmCause>,
    /// PDU address, TS 24.501 9.11.4.10. Opaque TLV payload.
    pub pdu_address: Option<Vec<u8>>,
}

impl PduSessionEstablishmentAccept {
    pub(crate) fn encode_ies(&self, out: &mut Vec<u8>) {
        out.push((self.selected_ssc_mode.value() << 4) | self.selected_pdu_session_type.value());
        out.extend_from_slice(&(self.authorized_qos_rules.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.authorized_qos_rules);
        out.push(self.session_ambr.len() as u8);
        out.extend_from_slice(&self.session_ambr);
        if let Some(cause) = self.sm_cause {
            out.push(IEI_SM_CAUSE);
            out.push(cause.value());
        }
        if let Some(address) = &self.pdu_address {
            out.push(IEI_PDU_ADDRESS);
            out.push(address.len() as u8);
            out.extend_from_slice(address);
        }
    }

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        r.require(
            "PDU Session Establishment Accept",
            "Selected PDU session type / SSC mode",
        )?;
        let octet = r.read_u8("selected PDU session type / SSC mode")?;
        let selected_pdu_session_type = PduSessionType::from_value(octet & 0x0f)?;
        let selected_ssc_mode = SscMode::from_value(octet >> 4)?;

        r.require("PDU Session Establishment Accept", "Authorized QoS rules")?;
        let qos_len = r.read_u16("authorized QoS rules length")? as usize;
        let authorized_qos_rules = r.read_vec(qos_len, "authorized QoS rules")?;

        r.require("PDU Session Establishment Accept", "Session AMBR")?;
        let ambr_len = r.read_u8("session AMBR length")? as usize;
        let session_ambr = r.read_vec(ambr_len, "session AMBR")?;

        let mut message = PduSessionEstablishmentAccept {
            selected_pdu_session_type,
            selected_ssc_mode,
            authorized_qos_rules,
            session_ambr,
            sm_cause: None,
            pdu_address: None,
        };
        while !r.is_empty() {
            let iei = r.read_u8("information element identifier")?;
            match iei {
                IEI_SM_CAUSE => {
                    message.sm_cause = Some(SmCause::from_value(r.read_u8("5GSM cause")?)?)
                }
                IEI_PDU_ADDRESS => {
                    let len = r.read_u8("PDU address length")? as usize;
                    message.pdu_address = Some(r.read_vec(len, "PDU address")?);
                }
                other => skip_unknown_ie(r, other)?,
            }
        }
        Ok(message)
    }
}
