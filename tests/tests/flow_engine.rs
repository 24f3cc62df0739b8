//! Engine-level behaviors: fatal decode failures abort the flow, and the
//! cancellation token stops it at the receive boundary.

use anyhow::Result;
use hex_literal::hex;
use std::sync::atomic::AtomicBool;
use uesim::flows::DeregistrationFlow;
use uesim::run_flow;
use uesim_tests::MockAmf;
use uesim_tests::framework::{self, AMF_UE_NGAP_ID, RAN_UE_NGAP_ID};

#[test]
fn malformed_ngap_frame_aborts_the_flow() -> Result<()> {
    // A single junk byte is not a decodable PDU.
    let script = vec![vec![vec![0xff]]];
    let (mut ctx, sent, logger) = framework::init(script)?;

    let result = run_flow(
        &mut DeregistrationFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    );

    assert!(result.is_err(), "{result:?}");
    // Only the opening request went out before the abort.
    assert_eq!(sent.borrow().len(), 1);
    Ok(())
}

#[test]
fn unsupported_nas_message_type_aborts_the_flow() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    // Message type 0x99 has no decoder; unlike a contextually wrong
    // message, this is fatal rather than discarded.
    let script = vec![vec![
        amf.downlink_raw_nas(hex!("7e0099").to_vec())?,
        amf.deregistration_accept()?,
    ]];
    let (mut ctx, sent, logger) = framework::init(script)?;

    let result = run_flow(
        &mut DeregistrationFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    );

    assert!(result.is_err(), "{result:?}");
    assert_eq!(sent.borrow().len(), 1);
    Ok(())
}

#[test]
fn cancellation_stops_the_flow_at_the_receive_boundary() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    let script = vec![vec![
        amf.deregistration_accept()?,
        amf.ue_context_release_command()?,
    ]];
    let (mut ctx, sent, logger) = framework::init(script)?;

    run_flow(
        &mut DeregistrationFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(true),
    )?;

    // The opening request was sent, but the scripted replies were never
    // consumed: no release complete followed.
    assert_eq!(sent.borrow().len(), 1);
    Ok(())
}
