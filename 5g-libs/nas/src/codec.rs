//! NAS message encoding and decoding.
//!
//! Wire layout: `discriminator(1)` then, for MM messages, the security
//! header type octet. A protected message continues with the 5-byte
//! security header (sequence number + integrity value) and the complete
//! inner message; a plain message continues with the message type octet
//! and the IEs in declared order. SM messages carry the PDU session
//! identity and PTI between discriminator and message type.

use crate::enums::{
    ExtendedProtocolDiscriminator, MmMessageType, SecurityHeaderType, SmMessageType,
};
use crate::errors::NasError;
use crate::messages::{
    DeregistrationAcceptUeOriginating, DeregistrationRequestUeOriginating, IdentityRequest,
    IdentityResponse, MmMessage, NasMessage, PduSessionEstablishmentAccept,
    PduSessionEstablishmentRequest, SecurityHeader, SmHeader, SmMessage,
};

pub fn encode(message: &NasMessage) -> Result<Vec<u8>, NasError> {
    let mut out = Vec::new();
    encode_into(message, &mut out)?;
    Ok(out)
}

fn encode_into(message: &NasMessage, out: &mut Vec<u8>) -> Result<(), NasError> {
    match message {
        NasMessage::Mm(m) => {
            out.push(ExtendedProtocolDiscriminator::MobilityManagement.value());
            out.push(SecurityHeaderType::NotProtected.value());
            out.push(m.message_type().value());
            match m {
                MmMessage::IdentityRequest(m) => m.encode_ies(out),
                MmMessage::IdentityResponse(m) => m.encode_ies(out),
                MmMessage::DeregistrationRequestUeOriginating(m) => m.encode_ies(out),
                MmMessage::DeregistrationAcceptUeOriginating(m) => m.encode_ies(out),
            }
        }
        NasMessage::Sm(header, m) => {
            out.push(ExtendedProtocolDiscriminator::SessionManagement.value());
            out.push(header.pdu_session_id);
            out.push(header.pti);
            out.push(m.message_type().value());
            match m {
                SmMessage::PduSessionEstablishmentRequest(m) => m.encode_ies(out),
                SmMessage::PduSessionEstablishmentAccept(m) => m.encode_ies(out),
            }
        }
        NasMessage::SecurityProtected(header, inner) => {
            // A wrapper with the plain header type would decode as the
            // inner message, breaking the round trip.
            if !header.security_header_type.is_protected() {
                return Err(NasError::UnprotectedWrapper);
            }
            out.push(ExtendedProtocolDiscriminator::MobilityManagement.value());
            out.push(header.security_header_type.value());
            out.push(header.sequence_number);
            out.extend_from_slice(&header.message_authentication_code);
            encode_into(inner, out)?;
        }
    }
    Ok(())
}

pub fn decode(bytes: &[u8]) -> Result<NasMessage, NasError> {
    let mut r = Reader::new(bytes);
    decode_inner(&mut r)
}

fn decode_inner(r: &mut Reader) -> Result<NasMessage, NasError> {
    let discriminator =
        ExtendedProtocolDiscriminator::from_value(r.read_u8("extended protocol discriminator")?)?;
    match discriminator {
        ExtendedProtocolDiscriminator::MobilityManagement => {
            let security_header_type =
                SecurityHeaderType::from_value(r.read_u8("security header type")?)?;
            if security_header_type.is_protected() {
                let sequence_number = r.read_u8("sequence number")?;
                let message_authentication_code = r.read_fixed::<4>("integrity value")?;
                let inner = decode_inner(r)?;
                Ok(NasMessage::SecurityProtected(
                    SecurityHeader {
                        security_header_type,
                        sequence_number,
                        message_authentication_code,
                    },
                    Box::new(inner),
                ))
            } else {
                let value = r.read_u8("message type")?;
                let message_type = MmMessageType::from_value(value)
                    .map_err(|_| NasError::UnsupportedMessageType { value })?;
                decode_mm_body(message_type, r).map(NasMessage::Mm)
            }
        }
        ExtendedProtocolDiscriminator::SessionManagement => {
            let pdu_session_id = r.read_u8("PDU session identity")?;
            let pti = r.read_u8("procedure transaction identity")?;
            let value = r.read_u8("message type")?;
            let message_type = SmMessageType::from_value(value)
                .map_err(|_| NasError::UnsupportedMessageType { value })?;
            let header = SmHeader {
                pdu_session_id,
                pti,
            };
            decode_sm_body(message_type, r).map(|m| NasMessage::Sm(header, m))
        }
    }
}

fn decode_mm_body(message_type: MmMessageType, r: &mut Reader) -> Result<MmMessage, NasError> {
    match message_type {
        MmMessageType::IdentityRequest => {
            IdentityRequest::decode_ies(r).map(MmMessage::IdentityRequest)
        }
        MmMessageType::IdentityResponse => {
            IdentityResponse::decode_ies(r).map(MmMessage::IdentityResponse)
        }
        MmMessageType::DeregistrationRequestUeOriginating => {
            DeregistrationRequestUeOriginating::decode_ies(r)
                .map(MmMessage::DeregistrationRequestUeOriginating)
        }
        MmMessageType::DeregistrationAcceptUeOriginating => {
            DeregistrationAcceptUeOriginating::decode_ies(r)
                .map(MmMessage::DeregistrationAcceptUeOriginating)
        }
        other => Err(NasError::UnsupportedMessageType {
            value: other.value(),
        }),
    }
}

fn decode_sm_body(message_type: SmMessageType, r: &mut Reader) -> Result<SmMessage, NasError> {
    match message_type {
        SmMessageType::PduSessionEstablishmentRequest => {
            PduSessionEstablishmentRequest::decode_ies(r)
                .map(SmMessage::PduSessionEstablishmentRequest)
        }
        SmMessageType::PduSessionEstablishmentAccept => {
            PduSessionEstablishmentAccept::decode_ies(r)
                .map(SmMessage::PduSessionEstablishmentAccept)
        }
        other => Err(NasError::UnsupportedMessageType {
            value: other.value(),
        }),
    }
}

/// Skip an IE that is not in the message's declared set.
///
/// TS 24.007, 11.2.4: an IEI with bit 8 set is a half-octet TV whose value
/// rode in the low nibble of the IEI octet, so nothing further needs to be
/// consumed. Any other unknown IEI is assumed to be TLV and skipped over
/// its 1-byte length. An unknown fixed-format TV cannot be told apart from
/// a TLV, in which case the length read here runs off the end of the
/// message and decoding fails rather than resynchronise.
pub(crate) fn skip_unknown_ie(r: &mut Reader, iei: u8) -> Result<(), NasError> {
    if iei & 0x80 != 0 {
        return Ok(());
    }
    if r.is_empty() {
        return Err(NasError::UnskippableIe { iei });
    }
    let len = r.read_u8("unknown IE length")? as usize;
    r.read_vec(len, "unknown IE")?;
    Ok(())
}

/// Bounds-checked byte cursor used by the message decoders.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Mandatory-IE presence check: running out of input where a declared
    /// mandatory IE begins is a missing IE, not a truncation.
    pub(crate) fn require(
        &self,
        message: &'static str,
        ie: &'static str,
    ) -> Result<(), NasError> {
        if self.is_empty() {
            Err(NasError::MissingIe { message, ie })
        } else {
            Ok(())
        }
    }

    pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, NasError> {
        if self.is_empty() {
            return Err(NasError::Truncated {
                field,
                needed: 1,
                remaining: 0,
            });
        }
        let b = self.bytes[self.pos];
        self.pos += 1;
        Ok(b)
    }

    pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, NasError> {
        Ok(u16::from_be_bytes(self.read_fixed::<2>(field)?))
    }

    pub(crate) fn read_fixed<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[u8; N], NasError> {
        if self.remaining() < N {
            return Err(NasError::Truncated {
                field,
                needed: N - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    pub(crate) fn read_vec(
        &mut self,
        len: usize,
        field: &'static str,
    ) -> Result<Vec<u8>, NasError> {
        if self.remaining() < len {
            return Err(NasError::Truncated {
                field,
                needed: len - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let out = self.bytes[self.pos..self.pos + len].to_vec();
        self.pos += len;
        Ok(out)
    }
}
