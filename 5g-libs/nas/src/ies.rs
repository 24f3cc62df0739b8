//! Shared information element value types.

use crate::codec::Reader;
use crate::enums::{AccessType, TypeOfSecurityContext};
use crate::errors::NasError;
use derive_deref::Deref;

/// 5GS mobile identity, TS 24.501 9.11.3.4. Kept opaque: the identity
/// digits are produced and consumed by the caller. Encoded LV-E (2-byte
/// length).
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct MobileIdentity(pub Vec<u8>);

impl MobileIdentity {
    pub(crate) fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.0.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.0);
    }

    pub(crate) fn decode(r: &mut Reader) -> Result<Self, NasError> {
        let len = r.read_u16("mobile identity length")? as usize;
        Ok(MobileIdentity(r.read_vec(len, "mobile identity")?))
    }
}

/// NAS key set identifier, TS 24.501 9.11.3.32. Half-octet value: bit 4 is
/// the type of security context, bits 1-3 the key set identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NasKeySetIdentifier {
    pub security_context_type: TypeOfSecurityContext,
    pub ksi: u8,
}

impl NasKeySetIdentifier {
    pub(crate) fn to_nibble(self) -> u8 {
        (self.security_context_type.value() << 3) | (self.ksi & 0b0111)
    }

    pub(crate) fn from_nibble(nibble: u8) -> Result<Self, NasError> {
        Ok(NasKeySetIdentifier {
            security_context_type: TypeOfSecurityContext::from_value(nibble >> 3)?,
            ksi: nibble & 0b0111,
        })
    }
}

/// De-registration type, TS 24.501 9.11.3.20. Half-octet value sharing an
/// octet with the NAS key set identifier in the de-registration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeregistrationType {
    pub switch_off: bool,
    pub re_registration_required: bool,
    pub access_type: AccessType,
}

impl DeregistrationType {
    pub(crate) fn to_nibble(self) -> u8 {
        ((self.switch_off as u8) << 3)
            | ((self.re_registration_required as u8) << 2)
            | self.access_type.value()
    }

    pub(crate) fn from_nibble(nibble: u8) -> Result<Self, NasError> {
        Ok(DeregistrationType {
            switch_off: nibble & 0b1000 != 0,
            re_registration_required: nibble & 0b0100 != 0,
            access_type: AccessType::from_value(nibble & 0b0011)?,
        })
    }
}
