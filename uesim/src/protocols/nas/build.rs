//! NAS message construction.

use crate::data::{DeregistrationInput, EstablishmentInput};
use anyhow::Result;
use nas::{
    AccessType, DeregistrationRequestUeOriginating, DeregistrationType, IdentityResponse,
    IdentityType, MmMessage, MobileIdentity, NasKeySetIdentifier, NasMessage,
    PduSessionEstablishmentRequest, PduSessionType, SmHeader, SmMessage, SscMode,
    TypeOfSecurityContext,
};

pub fn deregistration_request(input: &DeregistrationInput, imei: &[u8]) -> NasMessage {
    NasMessage::Mm(MmMessage::DeregistrationRequestUeOriginating(
        DeregistrationRequestUeOriginating {
            deregistration_type: DeregistrationType {
                switch_off: input.switch_off,
                re_registration_required: input.re_registration_required,
                access_type: AccessType::Threegpp,
            },
            ngksi: NasKeySetIdentifier {
                security_context_type: TypeOfSecurityContext::Native,
                ksi: 0,
            },
            mobile_identity: mobile_identity_imei(imei),
        },
    ))
}

pub fn identity_response(identity_type: IdentityType, imei: &[u8]) -> NasMessage {
    let mobile_identity = match identity_type {
        IdentityType::Imei => mobile_identity_imei(imei),
        // Other identity types need credentials this simulator does not
        // hold; answer with "no identity available" (type 000, one octet).
        _ => MobileIdentity(vec![0b0000_0000]),
    };
    NasMessage::Mm(MmMessage::IdentityResponse(IdentityResponse {
        mobile_identity,
    }))
}

pub fn pdu_session_establishment_request(
    pdu_session_id: u8,
    pti: u8,
    input: &EstablishmentInput,
) -> Result<NasMessage> {
    let pdu_session_type = match input.pdu_session_type {
        Some(value) => Some(PduSessionType::from_value(value)?),
        None => None,
    };
    let ssc_mode = match input.ssc_mode {
        Some(value) => Some(SscMode::from_value(value)?),
        None => None,
    };
    Ok(NasMessage::Sm(
        SmHeader {
            pdu_session_id,
            pti,
        },
        SmMessage::PduSessionEstablishmentRequest(PduSessionEstablishmentRequest {
            // TS 24.501 9.11.4.7 - "full data rate" in both directions.
            integrity_protection_maximum_data_rate: [0xff, 0xff],
            pdu_session_type,
            ssc_mode,
            sm_capability: None,
        }),
    ))
}

// TS 24.501, figure 9.11.3.4.4: type of identity 011 = IMEI, digits in BCD.
fn mobile_identity_imei(imei: &[u8]) -> MobileIdentity {
    let mut value = vec![0b0101_0011];
    value.extend_from_slice(imei);
    MobileIdentity(value)
}
