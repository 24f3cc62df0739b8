//! UE simulator: drives NAS signalling flows over an NGAP transport.

pub mod data;
pub mod flows;
pub mod protocols;
pub mod transport;

pub use data::{PduSession, SimulationContext, UeConfig, load_config_file};
pub use flows::{FLOWS, Flow, FlowDescriptor, FlowStep, IncomingMessage, find_flow, run_flow};
pub use transport::{ScriptedTransport, TcpTransport, Transport};
