//! 5GMM message bodies (TS 24.501, section 8.2).

use crate::codec::{Reader, skip_unknown_ie};
use crate::enums::IdentityType;
use crate::errors::NasError;
use crate::ies::{DeregistrationType, MobileIdentity, NasKeySetIdentifier};

/// Identity Request, TS 24.501 8.2.21.
///
/// One mandatory half-octet IE: the requested identity type in the low
/// nibble, spare in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityRequest {
    pub identity_type: IdentityType,
}

impl IdentityRequest {
    pub(crate) fn encode_ies(&self, out: &mut Vec<u8>) {
        out.push(self.identity_type.value() & 0x0f);
    }

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        r.require("Identity Request", "Identity type")?;
        let octet = r.read_u8("identity type")?;
        Ok(IdentityRequest {
            identity_type: IdentityType::from_value(octet & 0x0f)?,
        })
    }
}

/// Identity Response, TS 24.501 8.2.22.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityResponse {
    pub mobile_identity: MobileIdentity,
}

impl IdentityResponse {
    pub(crate) fn encode_ies(&self, out: &mut Vec<u8>) {
        self.mobile_identity.encode(out);
    }

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        r.require("Identity Response", "Mobile identity")?;
        Ok(IdentityResponse {
            mobile_identity: MobileIdentity::decode(r)?,
        })
    }
}

/// De-registration Request (UE originating), TS 24.501 8.2.12.
///
/// The de-registration type and the NAS key set identifier are two
/// mandatory half-octet IEs packed into one shared octet (type in the low
/// nibble, ngKSI in the high nibble).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeregistrationRequestUeOriginating {
    pub deregistration_type: DeregistrationType,
    pub ngksi: NasKeySetIdentifier,
    pub mobile_identity: MobileIdentity,
}

impl DeregistrationRequestUeOriginating {
    pub(crate) fn encode_ies(&self, out: &mut Vec<u8>) {
        out.push((self.ngksi.to_nibble() << 4) | self.deregistration_type.to_nibble());
        self.mobile_identity.encode(out);
    }

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        r.require(
            "De-registration Request (UE originating)",
            "De-registration type",
        )?;
        let octet = r.read_u8("de-registration type / ngKSI")?;
        let deregistration_type = DeregistrationType::from_nibble(octet & 0x0f)?;
        let ngksi = NasKeySetIdentifier::from_nibble(octet >> 4)?;
        r.require(
            "De-registration Request (UE originating)",
            "5GS mobile identity",
        )?;
        let mobile_identity = MobileIdentity::decode(r)?;
        Ok(DeregistrationRequestUeOriginating {
            deregistration_type,
            ngksi,
            mobile_identity,
        })
    }
}

/// De-registration Accept (UE originating), TS 24.501 8.2.13. No IEs
/// beyond the header; unknown trailing IEs are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeregistrationAcceptUeOriginating {}

impl DeregistrationAcceptUeOriginating {
    pub(crate) fn encode_ies(&self, _out: &mut Vec<u8>) {}

    pub(crate) fn decode_ies(r: &mut Reader) -> Result<Self, NasError> {
        while !r.is_empty() {
            let iei = r.read_u8("information element identifier")?;
            skip_unknown_ie(r, iei)?;
        }
        Ok(DeregistrationAcceptUeOriginating {})
    }
}
