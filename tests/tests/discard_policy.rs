//! Contextually wrong inbound messages are logged and discarded without
//! changing flow state.

use anyhow::Result;
use std::sync::atomic::AtomicBool;
use uesim::flows::deregistration::State;
use uesim::flows::{DeregistrationFlow, Flow, FlowStep, IncomingMessage};
use uesim::run_flow;
use uesim_tests::MockAmf;
use uesim_tests::framework::{self, AMF_UE_NGAP_ID, PDU_SESSION_ID, RAN_UE_NGAP_ID};

#[test]
fn wrong_messages_leave_the_state_unchanged() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    let (mut ctx, _sent, logger) = framework::init(vec![])?;
    let mut flow = DeregistrationFlow::default();

    let FlowStep::Next(mut state) = flow.start(&mut ctx, &logger)? else {
        panic!("flow finished before its first wait state");
    };
    assert_eq!(state, State::WaitDeregistrationAccept);

    let wrong = IncomingMessage::extract(ctx.decode_ngap(&amf.identity_request()?)?, &ctx)?;
    for _ in 0..3 {
        let step = flow.on_message(&mut ctx, &logger, state, &wrong)?;
        assert_eq!(step, FlowStep::Next(State::WaitDeregistrationAccept));
    }

    let accept = IncomingMessage::extract(ctx.decode_ngap(&amf.deregistration_accept()?)?, &ctx)?;
    let step = flow.on_message(&mut ctx, &logger, state, &accept)?;
    let FlowStep::Next(next) = step else {
        panic!("expected a transition");
    };
    state = next;
    assert_eq!(state, State::WaitUeContextReleaseCommand);
    Ok(())
}

#[test]
fn flow_completes_despite_interleaved_noise() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    let script = vec![vec![
        amf.identity_request()?,
        amf.pdu_session_establishment_accept(PDU_SESSION_ID, 1)?,
        amf.deregistration_accept()?,
        amf.identity_request()?,
        amf.ue_context_release_command()?,
    ]];
    let (mut ctx, sent, logger) = framework::init(script)?;

    run_flow(
        &mut DeregistrationFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    )?;

    // Request then release complete - the noise triggered no sends.
    assert_eq!(sent.borrow().len(), 2);
    Ok(())
}
