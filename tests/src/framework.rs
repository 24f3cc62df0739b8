use anyhow::Result;
use hex_literal::hex;
use ngap::TreeCodec;
use slog::{Drain, Logger, o};
use std::cell::RefCell;
use std::rc::Rc;
use uesim::data::{
    AmfConfig, CellConfig, DeregistrationInput, EstablishmentInput, Inputs, SecurityConfig,
    UeConfig, UeData,
};
use uesim::{ScriptedTransport, SimulationContext};

pub const RAN_UE_NGAP_ID: u32 = 1;
pub const AMF_UE_NGAP_ID: u64 = 10;
pub const PDU_SESSION_ID: u8 = 5;

/// Log of the raw payloads the simulator sent on its transport.
pub type SentLog = Rc<RefCell<Vec<Vec<u8>>>>;

/// Builds a simulation context over a scripted transport.  `script[n]`
/// is the list of peer replies triggered by the simulator's nth send.
pub fn init(script: Vec<Vec<Vec<u8>>>) -> Result<(SimulationContext, SentLog, Logger)> {
    init_with_config(script, test_config())
}

pub fn init_with_security(script: Vec<Vec<Vec<u8>>>) -> Result<(SimulationContext, SentLog, Logger)> {
    let mut config = test_config();
    config.security = Some(SecurityConfig {
        knas_int: hex!("d3c5d592327fb11c4035c6680af8c6d1"),
    });
    init_with_config(script, config)
}

fn init_with_config(
    script: Vec<Vec<Vec<u8>>>,
    config: UeConfig,
) -> Result<(SimulationContext, SentLog, Logger)> {
    let logger = init_logging();
    let transport = ScriptedTransport::new(script);
    let sent = transport.sent_log();
    let ctx = SimulationContext::new(config, Box::new(transport), Box::new(TreeCodec))?;
    Ok((ctx, sent, logger))
}

pub fn test_config() -> UeConfig {
    UeConfig {
        ue: UeData {
            supi: "imsi-234150000000001".to_string(),
            imei: hex!("53693803564380").to_vec(),
            ki: hex!("465b5ce8b199b49faa5f0a2ee238a6bc"),
            opc: hex!("e8ed289deba952e4283b54e88e6183ca"),
            amf: hex!("8000"),
            sqn: hex!("000000000001"),
            ran_ue_ngap_id: RAN_UE_NGAP_ID,
            amf_ue_ngap_id: AMF_UE_NGAP_ID,
        },
        amf: AmfConfig {
            host: "127.0.0.1".to_string(),
            port: 38412,
        },
        cell: CellConfig {
            mcc: "234".to_string(),
            mnc: "15".to_string(),
            nr_cell_identity: 0x12,
            tac: 1,
        },
        security: None,
        inputs: Inputs {
            deregistration: DeregistrationInput {
                switch_off: true,
                re_registration_required: false,
            },
            pdu_session_establishment: EstablishmentInput {
                pdu_session_id: PDU_SESSION_ID,
                pdu_session_type: Some(1),
                ssc_mode: Some(1),
            },
        },
    }
}

fn init_logging() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build();
    let drain = std::sync::Mutex::new(drain).fuse();
    let drain = slog_envlogger::new(drain);
    slog::Logger::root(drain, o!())
}
