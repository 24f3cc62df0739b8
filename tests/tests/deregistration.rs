use anyhow::Result;
use nas::{MmMessage, NasMessage, SecurityHeaderType};
use ngap::{NgapCodec, PduDescription, ProcedureCode, TreeCodec};
use std::sync::atomic::AtomicBool;
use uesim::flows::DeregistrationFlow;
use uesim::run_flow;
use uesim_tests::MockAmf;
use uesim_tests::framework::{self, AMF_UE_NGAP_ID, RAN_UE_NGAP_ID};

#[test]
fn deregistration() -> Result<()> {
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
        &AtomicBool::new(false),
    )?;

    let sent = sent.borrow();
    assert_eq!(sent.len(), 2);

    let request = TreeCodec.decode(&sent[0])?;
    assert_eq!(request.description, PduDescription::InitiatingMessage);
    assert_eq!(request.procedure, ProcedureCode::UplinkNasTransport);
    let nas = nas::decode(request.nas_pdu().expect("NAS PDU missing"))?;
    let NasMessage::Mm(MmMessage::DeregistrationRequestUeOriginating(request)) = nas else {
        panic!("expected a de-registration request, got {nas:?}");
    };
    assert!(request.deregistration_type.switch_off);

    let complete = TreeCodec.decode(&sent[1])?;
    assert_eq!(complete.description, PduDescription::SuccessfulOutcome);
    assert_eq!(complete.procedure, ProcedureCode::UeContextRelease);
    assert!(complete.nas_pdu().is_none());
    Ok(())
}

#[test]
fn deregistration_with_integrity_protection() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    let script = vec![vec![
        amf.deregistration_accept()?,
        amf.ue_context_release_command()?,
    ]];
    let (mut ctx, sent, logger) = framework::init_with_security(script)?;

    run_flow(
        &mut DeregistrationFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    )?;

    let sent = sent.borrow();
    let request = TreeCodec.decode(&sent[0])?;
    let nas_bytes = request.nas_pdu().expect("NAS PDU missing");
    let nas = nas::decode(nas_bytes)?;
    let NasMessage::SecurityProtected(header, inner) = nas else {
        panic!("expected a security-protected message, got {nas:?}");
    };
    assert_eq!(
        header.security_header_type,
        SecurityHeaderType::IntegrityProtectedWithNewSecurityContext
    );
    assert_eq!(header.sequence_number, 0);
    assert!(matches!(
        *inner,
        NasMessage::Mm(MmMessage::DeregistrationRequestUeOriginating(_))
    ));

    // Outer header adds exactly 5 octets ahead of the inner message.
    let inner_bytes = nas::encode(&inner)?;
    assert_eq!(nas_bytes.len(), 2 + 5 + inner_bytes.len());
    assert_eq!(&nas_bytes[7..], &inner_bytes[..]);
    Ok(())
}
