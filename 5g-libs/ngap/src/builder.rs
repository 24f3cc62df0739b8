//! Ordered-IE builder for NGAP PDUs.

use crate::errors::NgapError;
use crate::pdu::{
    Criticality, IeValue, NgapPdu, PduDescription, ProcedureCode, ProtocolIe, ProtocolIeId,
    UserLocationInformationNr,
};

/// Assembles an [`NgapPdu`] one IE at a time.
///
/// IEs appear in the built tree in exactly the order they were added; the
/// caller is responsible for following the standard's per-procedure IE
/// ordering. The only validation performed is the rejection of duplicate
/// IE ids at [`build`](NgapBuilder::build) time.
pub struct NgapBuilder {
    description: PduDescription,
    procedure: ProcedureCode,
    criticality: Criticality,
    ies: Vec<ProtocolIe>,
}

impl NgapBuilder {
    pub fn new(
        description: PduDescription,
        procedure: ProcedureCode,
        criticality: Criticality,
    ) -> Self {
        NgapBuilder {
            description,
            procedure,
            criticality,
            ies: Vec::new(),
        }
    }

    pub fn add_ie(mut self, id: ProtocolIeId, criticality: Criticality, value: IeValue) -> Self {
        self.ies.push(ProtocolIe {
            id,
            criticality,
            value,
        });
        self
    }

    pub fn add_amf_ue_ngap_id(self, id: u64, criticality: Criticality) -> Self {
        self.add_ie(ProtocolIeId::AmfUeNgapId, criticality, IeValue::AmfUeNgapId(id))
    }

    pub fn add_ran_ue_ngap_id(self, id: u32, criticality: Criticality) -> Self {
        self.add_ie(ProtocolIeId::RanUeNgapId, criticality, IeValue::RanUeNgapId(id))
    }

    pub fn add_nas_pdu(self, nas_pdu: Vec<u8>, criticality: Criticality) -> Self {
        self.add_ie(ProtocolIeId::NasPdu, criticality, IeValue::NasPdu(nas_pdu))
    }

    pub fn add_user_location_information(
        self,
        uli: UserLocationInformationNr,
        criticality: Criticality,
    ) -> Self {
        self.add_ie(
            ProtocolIeId::UserLocationInformation,
            criticality,
            IeValue::UserLocationInformation(uli),
        )
    }

    pub fn build(self) -> Result<NgapPdu, NgapError> {
        for (index, ie) in self.ies.iter().enumerate() {
            if self.ies[..index].iter().any(|other| other.id == ie.id) {
                return Err(NgapError::DuplicateIe { id: ie.id });
            }
        }
        Ok(NgapPdu {
            description: self.description,
            procedure: self.procedure,
            criticality: self.criticality,
            ies: self.ies,
        })
    }
}
