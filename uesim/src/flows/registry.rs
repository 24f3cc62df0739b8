//! Static flow registry keyed by flow name.

use super::{DeregistrationFlow, PduSessionEstablishmentFlow, run_flow};
use crate::data::SimulationContext;
use anyhow::Result;
use slog::Logger;
use std::sync::atomic::AtomicBool;

pub struct FlowDescriptor {
    pub name: &'static str,
    /// Name of the `[inputs.*]` config section the flow reads.
    pub input_key: &'static str,
    pub run: fn(&mut SimulationContext, &Logger, &AtomicBool) -> Result<()>,
}

pub static FLOWS: &[FlowDescriptor] = &[
    FlowDescriptor {
        name: "deregistration",
        input_key: "deregistration",
        run: |ctx, logger, cancelled| {
            run_flow(&mut DeregistrationFlow::default(), ctx, logger, cancelled)
        },
    },
    FlowDescriptor {
        name: "pdu-session-establishment",
        input_key: "pdu_session_establishment",
        run: |ctx, logger, cancelled| {
            run_flow(
                &mut PduSessionEstablishmentFlow::default(),
                ctx,
                logger,
                cancelled,
            )
        },
    },
];

pub fn find_flow(name: &str) -> Option<&'static FlowDescriptor> {
    FLOWS.iter().find(|flow| flow.name == name)
}
