use super::config::{UeConfig, convert_mcc_mnc};
use super::procedure_transactions::ProcedureTransactionTable;
use super::security_context::NasSecurityContext;
use crate::transport::Transport;
use anyhow::{Result, anyhow, ensure};
use nas::{NasMessage, PduSessionType};
use ngap::{NgapCodec, NgapPdu, NrCgi, Tai, UserLocationInformationNr};

/// An established PDU session, as acknowledged by the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PduSession {
    pub id: u8,
    pub pdu_session_type: PduSessionType,
    pub pdu_address: Option<Vec<u8>>,
}

/// All mutable state of one simulated UE plus its RAN signalling leg.
///
/// Exactly one flow borrows the context mutably at a time; there is no
/// interior mutability and no sharing across threads.
pub struct SimulationContext {
    pub config: UeConfig,
    pub serving_network_name: String,
    plmn: [u8; 3],
    security: Option<NasSecurityContext>,
    pub transactions: ProcedureTransactionTable,
    pub pdu_sessions: Vec<PduSession>,
    transport: Box<dyn Transport>,
    codec: Box<dyn NgapCodec>,
}

impl SimulationContext {
    pub fn new(
        config: UeConfig,
        transport: Box<dyn Transport>,
        codec: Box<dyn NgapCodec>,
    ) -> Result<Self> {
        ensure!(
            config.cell.tac <= 0xff_ffff,
            "TAC {:#x} does not fit in 24 bits",
            config.cell.tac
        );
        let (plmn, serving_network_name) = convert_mcc_mnc(&config.cell.mcc, &config.cell.mnc)?;
        let security = config
            .security
            .as_ref()
            .map(|s| NasSecurityContext::new(s.knas_int));
        Ok(SimulationContext {
            config,
            serving_network_name,
            plmn,
            security,
            transactions: ProcedureTransactionTable::default(),
            pdu_sessions: Vec::new(),
            transport,
            codec,
        })
    }

    pub fn ran_ue_ngap_id(&self) -> u32 {
        self.config.ue.ran_ue_ngap_id
    }

    pub fn amf_ue_ngap_id(&self) -> u64 {
        self.config.ue.amf_ue_ngap_id
    }

    pub fn user_location(&self) -> UserLocationInformationNr {
        let tac = self.config.cell.tac.to_be_bytes();
        UserLocationInformationNr {
            nr_cgi: NrCgi {
                plmn: self.plmn,
                nr_cell_identity: self.config.cell.nr_cell_identity,
            },
            tai: Tai {
                plmn: self.plmn,
                tac: [tac[1], tac[2], tac[3]],
            },
        }
    }

    pub fn send_ngap(&mut self, pdu: &NgapPdu) -> Result<()> {
        let bytes = self.codec.encode(pdu)?;
        self.transport.send(&bytes)
    }

    pub fn blocking_receive(&mut self) -> Result<Option<Vec<u8>>> {
        self.transport.blocking_receive()
    }

    pub fn decode_ngap(&self, bytes: &[u8]) -> Result<NgapPdu> {
        Ok(self.codec.decode(bytes)?)
    }

    /// Encodes an outgoing NAS message, applying integrity protection
    /// when a security context has been established.
    pub fn encode_nas(&mut self, message: NasMessage) -> Result<Vec<u8>> {
        let message = if let Some(security) = &mut self.security {
            security.protect(message)?
        } else {
            message
        };
        Ok(nas::encode(&message)?)
    }

    /// Decodes an incoming NAS message, unwrapping the security header.
    pub fn decode_nas(&self, bytes: &[u8]) -> Result<NasMessage> {
        let message = nas::decode(bytes)
            .map_err(|e| anyhow!("NAS decode error - {e} - message bytes: {bytes:?}"))?;
        match message {
            NasMessage::SecurityProtected(_header, inner) => {
                // TODO: verify the downlink integrity value
                Ok(*inner)
            }
            message => Ok(message),
        }
    }
}
