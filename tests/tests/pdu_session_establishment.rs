use anyhow::Result;
use nas::{NasMessage, PduSessionType, SmMessage};
use ngap::{NgapCodec, PduDescription, ProcedureCode, TreeCodec};
use std::sync::atomic::AtomicBool;
use uesim::data::PduSession;
use uesim::flows::PduSessionEstablishmentFlow;
use uesim::run_flow;
use uesim_tests::MockAmf;
use uesim_tests::framework::{self, AMF_UE_NGAP_ID, PDU_SESSION_ID, RAN_UE_NGAP_ID};

#[test]
fn pdu_session_establishment() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    // PTI 1 is the first identity the flow allocates.
    let script = vec![vec![
        amf.pdu_session_establishment_accept(PDU_SESSION_ID, 1)?,
    ]];
    let (mut ctx, sent, logger) = framework::init(script)?;

    run_flow(
        &mut PduSessionEstablishmentFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    )?;

    assert_eq!(
        ctx.pdu_sessions,
        vec![PduSession {
            id: PDU_SESSION_ID,
            pdu_session_type: PduSessionType::Ipv4,
            pdu_address: Some(vec![0x01, 10, 1, 1, 1]),
        }]
    );
    assert!(!ctx.transactions.is_in_use(1));

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    let pdu = TreeCodec.decode(&sent[0])?;
    assert_eq!(pdu.description, PduDescription::InitiatingMessage);
    assert_eq!(pdu.procedure, ProcedureCode::UplinkNasTransport);
    let nas = nas::decode(pdu.nas_pdu().expect("NAS PDU missing"))?;
    let NasMessage::Sm(header, SmMessage::PduSessionEstablishmentRequest(request)) = nas else {
        panic!("expected an establishment request, got {nas:?}");
    };
    assert_eq!(header.pdu_session_id, PDU_SESSION_ID);
    assert_eq!(header.pti, 1);
    assert_eq!(request.pdu_session_type, Some(PduSessionType::Ipv4));
    Ok(())
}

#[test]
fn accept_for_another_transaction_is_ignored() -> Result<()> {
    let amf = MockAmf::new(AMF_UE_NGAP_ID, RAN_UE_NGAP_ID);
    // An accept for PTI 9 does not belong to this flow; the matching one
    // for PTI 1 follows it.
    let script = vec![vec![
        amf.pdu_session_establishment_accept(PDU_SESSION_ID, 9)?,
        amf.pdu_session_establishment_accept(PDU_SESSION_ID, 1)?,
    ]];
    let (mut ctx, _sent, logger) = framework::init(script)?;

    run_flow(
        &mut PduSessionEstablishmentFlow::default(),
        &mut ctx,
        &logger,
        &AtomicBool::new(false),
    )?;

    assert_eq!(ctx.pdu_sessions.len(), 1);
    Ok(())
}
