//! Cooperative signalling flow engine.
//!
//! A flow is a state machine with a single suspension point: the blocking
//! receive on the transport.  `start` sends the opening message and names
//! the first wait state; `on_message` is called once per inbound message
//! and either transitions, finishes, or keeps the current state when the
//! message is contextually wrong (which is logged and otherwise ignored).
//! Only decode failures and send failures abort a flow.

pub mod deregistration;
pub mod pdu_session_establishment;
mod registry;

pub use deregistration::DeregistrationFlow;
pub use pdu_session_establishment::PduSessionEstablishmentFlow;
pub use registry::{FLOWS, FlowDescriptor, find_flow};

use crate::data::SimulationContext;
use anyhow::Result;
use nas::NasMessage;
use ngap::NgapPdu;
use slog::{Logger, debug, info};
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of one flow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep<S> {
    Next(S),
    Finished,
}

/// An inbound NGAP PDU with its embedded NAS message already decoded.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub pdu: NgapPdu,
    pub nas: Option<NasMessage>,
}

impl IncomingMessage {
    /// Fails when the PDU carries a NAS payload that does not decode;
    /// that failure is fatal to the flow.
    pub fn extract(pdu: NgapPdu, ctx: &SimulationContext) -> Result<Self> {
        let nas = match pdu.nas_pdu() {
            Some(bytes) => Some(ctx.decode_nas(bytes)?),
            None => None,
        };
        Ok(IncomingMessage { pdu, nas })
    }
}

pub trait Flow {
    type State: Copy + Debug + PartialEq;

    fn name(&self) -> &'static str;

    /// Sends the opening message(s) and returns the first wait state.
    fn start(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
    ) -> Result<FlowStep<Self::State>>;

    /// Handles one inbound message in the given state.
    fn on_message(
        &mut self,
        ctx: &mut SimulationContext,
        logger: &Logger,
        state: Self::State,
        message: &IncomingMessage,
    ) -> Result<FlowStep<Self::State>>;
}

/// Drives a flow to completion against the context's transport.
///
/// Returns without error when the flow finishes, when the transport
/// closes, or when cancellation is requested.
pub fn run_flow<F: Flow>(
    flow: &mut F,
    ctx: &mut SimulationContext,
    logger: &Logger,
    cancelled: &AtomicBool,
) -> Result<()> {
    info!(logger, "Flow {} starts", flow.name());
    let mut state = match flow.start(ctx, logger)? {
        FlowStep::Next(state) => state,
        FlowStep::Finished => {
            info!(logger, "Flow {} complete", flow.name());
            return Ok(());
        }
    };

    loop {
        if cancelled.load(Ordering::Relaxed) {
            info!(logger, "Flow {} cancelled in state {state:?}", flow.name());
            return Ok(());
        }
        let Some(bytes) = ctx.blocking_receive()? else {
            info!(
                logger,
                "Transport closed - flow {} ends in state {state:?}",
                flow.name()
            );
            return Ok(());
        };
        let pdu = ctx.decode_ngap(&bytes)?;
        debug!(logger, "Received {:?} PDU", pdu.procedure);
        let message = IncomingMessage::extract(pdu, ctx)?;

        match flow.on_message(ctx, logger, state, &message)? {
            FlowStep::Next(next) => state = next,
            FlowStep::Finished => {
                info!(logger, "Flow {} complete", flow.name());
                return Ok(());
            }
        }
    }
}
