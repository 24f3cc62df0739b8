//! UE-requested PDU session establishment.

use super::{Flow, FlowStep, IncomingMessage};
use crate::data::{PduSession, SimulationContext};
use crate::protocols;
use anyhow::Result;
use nas::{NasMessage, SmMessage};
use ngap::{PduDescription, ProcedureCode};
use slog::{Logger, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    WaitEstablishmentAccept,
}

#[derive(Default)]
pub struct PduSessionEstablishmentFlow {
    pdu_session_id: u8,
    pti: u8,
}

impl Flow for PduSessionEstablishmentFlow {
    type State = State;

    fn name(&self) -> &'static str {
        "pdu-session-establishment"
    }

    fn start(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
    ) -> Result<FlowStep<State>> {
        let input = ctx.config.inputs.pdu_session_establishment.clone();
        self.pdu_session_id = input.pdu_session_id;
        self.pti = ctx.transactions.allocate()?;

        let request = protocols::nas::build::pdu_session_establishment_request(
            self.pdu_session_id,
            self.pti,
            &input,
        )?;
        let nas_bytes = ctx.encode_nas(request)?;
        let pdu = protocols::ngap::build::uplink_nas_transport(ctx, nas_bytes)?;
        ctx.send_ngap(&pdu)?;
        info!(
            logger,
            "<< PduSessionEstablishmentRequest (PSI {}, PTI {})", self.pdu_session_id, self.pti
        );
        Ok(FlowStep::Next(State::WaitEstablishmentAccept))
    }

    fn on_message(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
        state: State,
        message: &IncomingMessage,
    ) -> Result<FlowStep<State>> {
        let State::WaitEstablishmentAccept = state;

        let downlink_nas = message.pdu.description == PduDescription::InitiatingMessage
            && message.pdu.procedure == ProcedureCode::DownlinkNasTransport;
        let accept = match &message.nas {
            Some(NasMessage::Sm(header, SmMessage::PduSessionEstablishmentAccept(accept)))
                if downlink_nas
                    && header.pdu_session_id == self.pdu_session_id
                    && header.pti == self.pti =>
            {
                accept
            }
            _ => {
                warn!(
                    logger,
                    "bad message, PduSessionEstablishmentAccept is expected. message ignored"
                );
                return Ok(FlowStep::Next(state));
            }
        };
        info!(logger, ">> PduSessionEstablishmentAccept");

        ctx.transactions.release(self.pti);
        ctx.pdu_sessions.push(PduSession {
            id: self.pdu_session_id,
            pdu_session_type: accept.selected_pdu_session_type,
            pdu_address: accept.pdu_address.clone(),
        });
        info!(
            logger,
            "PDU session {} established ({})",
            self.pdu_session_id,
            accept.selected_pdu_session_type
        );
        Ok(FlowStep::Finished)
    }
}
