//! main - runs one signalling flow for a single simulated UE

use anyhow::{Result, anyhow};
use clap::Parser;
use ngap::TreeCodec;
use signal_hook::consts::signal::*;
use slog::{Drain, Logger, info, o};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use uesim::transport::TcpTransport;
use uesim::{SimulationContext, find_flow, load_config_file};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the UE configuration file.
    #[arg(long, default_value = "uesim.toml")]
    config: String,

    /// Name of the flow to run, e.g. "deregistration" or
    /// "pdu-session-establishment".
    #[arg(long)]
    flow: String,
}

fn main() -> Result<()> {
    exit_on_panic();
    let logger = init_logging();

    let args = Args::parse();
    let flow = find_flow(&args.flow)
        .ok_or_else(|| anyhow!("unknown flow {} - known flows: {:?}", args.flow, flow_names()))?;
    let config = load_config_file(&args.config, &logger)?;

    let cancelled = Arc::new(AtomicBool::new(false));
    for signal in [SIGTERM, SIGINT, SIGQUIT] {
        signal_hook::flag::register(signal, Arc::clone(&cancelled))?;
    }

    info!(
        logger,
        "Connecting to AMF at {}:{}", config.amf.host, config.amf.port
    );
    let transport = TcpTransport::connect(&config.amf.host, config.amf.port, Arc::clone(&cancelled))?;
    let mut ctx = SimulationContext::new(config, Box::new(transport), Box::new(TreeCodec))?;
    info!(logger, "Serving network name {}", ctx.serving_network_name);
    info!(
        logger,
        "Running flow {} with inputs [inputs.{}]", flow.name, flow.input_key
    );

    (flow.run)(&mut ctx, &logger, &cancelled)
}

fn flow_names() -> Vec<&'static str> {
    uesim::FLOWS.iter().map(|flow| flow.name).collect()
}

fn init_logging() -> Logger {
    // Use info level logging by default
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "info") }
    }
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = slog_envlogger::new(drain);
    slog::Logger::root(drain, o!())
}

fn exit_on_panic() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        std::process::exit(1);
    }));
}
