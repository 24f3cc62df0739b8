//! UE-originating de-registration.
//!
//! Sends a De-registration Request, waits for the network's accept, then
//! waits for the UE Context Release Command and answers it with a
//! Release Complete.

use super::{Flow, FlowStep, IncomingMessage};
use crate::data::SimulationContext;
use crate::protocols;
use anyhow::Result;
use nas::{MmMessage, NasMessage};
use ngap::{PduDescription, ProcedureCode};
use slog::{Logger, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    WaitDeregistrationAccept,
    WaitUeContextReleaseCommand,
}

#[derive(Default)]
pub struct DeregistrationFlow {}

impl Flow for DeregistrationFlow {
    type State = State;

    fn name(&self) -> &'static str {
        "deregistration"
    }

    fn start(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
    ) -> Result<FlowStep<State>> {
        let request = protocols::nas::build::deregistration_request(
            &ctx.config.inputs.deregistration,
            &ctx.config.ue.imei,
        );
        let nas_bytes = ctx.encode_nas(request)?;
        let pdu = protocols::ngap::build::uplink_nas_transport(ctx, nas_bytes)?;
        ctx.send_ngap(&pdu)?;
        info!(logger, "<< DeregistrationRequestUeOriginating");
        Ok(FlowStep::Next(State::WaitDeregistrationAccept))
    }

    fn on_message(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
        state: State,
        message: &IncomingMessage,
    ) -> Result<FlowStep<State>> {
        match state {
            State::WaitDeregistrationAccept => {
                let downlink_nas = message.pdu.description == PduDescription::InitiatingMessage
                    && message.pdu.procedure == ProcedureCode::DownlinkNasTransport;
                let is_accept = matches!(
                    message.nas,
                    Some(NasMessage::Mm(MmMessage::DeregistrationAcceptUeOriginating(_)))
                );
                if !(downlink_nas && is_accept) {
                    warn!(
                        logger,
                        "bad message, DeregistrationAcceptUeOriginating is expected. message ignored"
                    );
                    return Ok(FlowStep::Next(state));
                }
                info!(logger, ">> DeregistrationAcceptUeOriginating");
                Ok(FlowStep::Next(State::WaitUeContextReleaseCommand))
            }
            State::WaitUeContextReleaseCommand => {
                let is_release_command = message.pdu.description
                    == PduDescription::InitiatingMessage
                    && message.pdu.procedure == ProcedureCode::UeContextRelease;
                if !is_release_command {
                    warn!(
                        logger,
                        "bad message, UeContextReleaseCommand is expected. message ignored"
                    );
                    return Ok(FlowStep::Next(state));
                }
                info!(logger, ">> UeContextReleaseCommand");

                let complete = protocols::ngap::build::ue_context_release_complete(ctx)?;
                ctx.send_ngap(&complete)?;
                info!(logger, "<< UeContextReleaseComplete");
                Ok(FlowStep::Finished)
            }
        }
    }
}
