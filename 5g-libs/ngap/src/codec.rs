//! Wire boundary for NGAP PDUs.
//!
//! Production deployments translate [`NgapPdu`] to and from ASN.1 PER
//! with an external codec behind the [`NgapCodec`] trait. [`TreeCodec`]
//! is the stand-in shipped here: a deterministic byte framing of the
//! typed tree, used by the scripted-transport and test paths where no
//! PER stack is linked.

use crate::errors::NgapError;
use crate::pdu::{
    Cause, Criticality, IeValue, NgapPdu, NrCgi, PduDescription, ProcedureCode, ProtocolIe,
    ProtocolIeId, Tai, UserLocationInformationNr,
};

pub trait NgapCodec {
    fn encode(&self, pdu: &NgapPdu) -> Result<Vec<u8>, NgapError>;
    fn decode(&self, bytes: &[u8]) -> Result<NgapPdu, NgapError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TreeCodec;

// Frame layout: description(1) procedure(1) criticality(1) ie-count(1),
// then per IE: id(2) criticality(1) length(2) value.
impl NgapCodec for TreeCodec {
    fn encode(&self, pdu: &NgapPdu) -> Result<Vec<u8>, NgapError> {
        let mut out = vec![
            pdu.description.into(),
            pdu.procedure.into(),
            pdu.criticality.into(),
            pdu.ies.len() as u8,
        ];
        for ie in &pdu.ies {
            out.extend_from_slice(&u16::from(ie.id).to_be_bytes());
            out.push(ie.criticality.into());
            let value = encode_value(&ie.value);
            out.extend_from_slice(&(value.len() as u16).to_be_bytes());
            out.extend_from_slice(&value);
        }
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<NgapPdu, NgapError> {
        let mut r = Reader { bytes, pos: 0 };
        let description = PduDescription::try_from(r.read_u8("PDU description")?)
            .map_err(|e| unknown("PDU description", e.number))?;
        let procedure = ProcedureCode::try_from(r.read_u8("procedure code")?)
            .map_err(|e| unknown("procedure code", e.number))?;
        let criticality = Criticality::try_from(r.read_u8("criticality")?)
            .map_err(|e| unknown("criticality", e.number))?;
        let count = r.read_u8("IE count")?;

        let mut ies = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let id = ProtocolIeId::try_from(r.read_u16("protocol IE id")?)
                .map_err(|e| unknown("protocol IE id", e.number))?;
            let criticality = Criticality::try_from(r.read_u8("IE criticality")?)
                .map_err(|e| unknown("criticality", e.number))?;
            let length = r.read_u16("IE length")? as usize;
            let value = r.read_slice(length, "IE value")?;
            ies.push(ProtocolIe {
                id,
                criticality,
                value: decode_value(id, value)?,
            });
        }
        Ok(NgapPdu {
            description,
            procedure,
            criticality,
            ies,
        })
    }
}

fn unknown<N: Into<u64>>(field: &'static str, value: N) -> NgapError {
    NgapError::UnknownValue {
        field,
        value: value.into(),
    }
}

fn encode_value(value: &IeValue) -> Vec<u8> {
    match value {
        IeValue::AmfUeNgapId(id) => id.to_be_bytes().to_vec(),
        IeValue::RanUeNgapId(id) => id.to_be_bytes().to_vec(),
        IeValue::NasPdu(bytes) => bytes.clone(),
        IeValue::Cause(cause) => {
            let (group, value) = match cause {
                Cause::RadioNetwork(v) => (0, *v),
                Cause::Transport(v) => (1, *v),
                Cause::Nas(v) => (2, *v),
                Cause::Protocol(v) => (3, *v),
                Cause::Misc(v) => (4, *v),
            };
            vec![group, value]
        }
        IeValue::RrcEstablishmentCause(v) => vec![*v],
        IeValue::UserLocationInformation(uli) => {
            let mut out = Vec::with_capacity(17);
            out.extend_from_slice(&uli.nr_cgi.plmn);
            out.extend_from_slice(&uli.nr_cgi.nr_cell_identity.to_be_bytes());
            out.extend_from_slice(&uli.tai.plmn);
            out.extend_from_slice(&uli.tai.tac);
            out
        }
    }
}

fn decode_value(id: ProtocolIeId, value: &[u8]) -> Result<IeValue, NgapError> {
    let malformed = || NgapError::MalformedIe {
        id,
        length: value.len(),
    };
    match id {
        ProtocolIeId::AmfUeNgapId => Ok(IeValue::AmfUeNgapId(u64::from_be_bytes(
            value.try_into().map_err(|_| malformed())?,
        ))),
        ProtocolIeId::RanUeNgapId => Ok(IeValue::RanUeNgapId(u32::from_be_bytes(
            value.try_into().map_err(|_| malformed())?,
        ))),
        ProtocolIeId::NasPdu => Ok(IeValue::NasPdu(value.to_vec())),
        ProtocolIeId::Cause => {
            let &[group, cause] = value else {
                return Err(malformed());
            };
            Ok(IeValue::Cause(match group {
                0 => Cause::RadioNetwork(cause),
                1 => Cause::Transport(cause),
                2 => Cause::Nas(cause),
                3 => Cause::Protocol(cause),
                4 => Cause::Misc(cause),
                other => return Err(unknown("cause group", other)),
            }))
        }
        ProtocolIeId::RrcEstablishmentCause => {
            let &[cause] = value else {
                return Err(malformed());
            };
            Ok(IeValue::RrcEstablishmentCause(cause))
        }
        ProtocolIeId::UserLocationInformation => {
            if value.len() != 17 {
                return Err(malformed());
            }
            Ok(IeValue::UserLocationInformation(UserLocationInformationNr {
                nr_cgi: NrCgi {
                    plmn: value[0..3].try_into().unwrap(),
                    nr_cell_identity: u64::from_be_bytes(value[3..11].try_into().unwrap()),
                },
                tai: Tai {
                    plmn: value[11..14].try_into().unwrap(),
                    tac: value[14..17].try_into().unwrap(),
                },
            }))
        }
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn read_u8(&mut self, field: &'static str) -> Result<u8, NgapError> {
        Ok(self.read_slice(1, field)?[0])
    }

    fn read_u16(&mut self, field: &'static str) -> Result<u16, NgapError> {
        Ok(u16::from_be_bytes(
            self.read_slice(2, field)?.try_into().unwrap(),
        ))
    }

    fn read_slice(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], NgapError> {
        if self.remaining() < len {
            return Err(NgapError::Truncated {
                field,
                needed: len - self.remaining(),
                remaining: self.remaining(),
            });
        }
        let out = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::NgapBuilder;

    #[test]
    fn round_trip() {
        let pdu = NgapBuilder::new(
            PduDescription::InitiatingMessage,
            ProcedureCode::UplinkNasTransport,
            Criticality::Ignore,
        )
        .add_amf_ue_ngap_id(0x1122334455, Criticality::Reject)
        .add_ran_ue_ngap_id(42, Criticality::Reject)
        .add_nas_pdu(vec![0x7e, 0x00, 0x5b, 0x03], Criticality::Reject)
        .add_user_location_information(
            UserLocationInformationNr {
                nr_cgi: NrCgi {
                    plmn: [0x02, 0xf8, 0x39],
                    nr_cell_identity: 0x12,
                },
                tai: Tai {
                    plmn: [0x02, 0xf8, 0x39],
                    tac: [0, 0, 1],
                },
            },
            Criticality::Ignore,
        )
        .build()
        .unwrap();

        let bytes = TreeCodec.encode(&pdu).unwrap();
        assert_eq!(TreeCodec.decode(&bytes).unwrap(), pdu);
    }

    #[test]
    fn truncated_frame_fails() {
        let pdu = NgapBuilder::new(
            PduDescription::SuccessfulOutcome,
            ProcedureCode::UeContextRelease,
            Criticality::Reject,
        )
        .add_ran_ue_ngap_id(1, Criticality::Ignore)
        .build()
        .unwrap();
        let bytes = TreeCodec.encode(&pdu).unwrap();
        let err = TreeCodec.decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, NgapError::Truncated { .. }), "{err:?}");
    }

    #[test]
    fn unknown_procedure_code_fails() {
        let err = TreeCodec.decode(&[0, 99, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            NgapError::UnknownValue {
                field: "procedure code",
                value: 99
            }
        );
    }
}
