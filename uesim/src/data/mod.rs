mod config;
mod procedure_transactions;
mod security_context;
mod sim_context;

pub use config::{
    AmfConfig, CellConfig, DeregistrationInput, EstablishmentInput, Inputs, SecurityConfig,
    UeConfig, UeData, convert_mcc_mnc, load_config_file,
};
pub use procedure_transactions::{ProcedureTransaction, ProcedureTransactionTable, PtiExhausted};
pub use security_context::{NasSecurityContext, calculate_nia2_mac};
pub use sim_context::{PduSession, SimulationContext};
