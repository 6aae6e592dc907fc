use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use hargraph::config::ServerEndpoint;
use hargraph::config_loader;
use hargraph::graph::OutputFormat;
use hargraph::orchestrator::{self, Conversion};

/// Convert a browser HAR trace into a traffic-generator graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the HAR trace file
    trace: PathBuf,

    /// Server the replayed transfers are fetched from, as host:port
    server: ServerEndpoint,

    /// Output graph file
    output: PathBuf,

    /// Output format (inferred from the output extension if omitted)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Optional YAML file with pause and transfer settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log skipped entries and the burst listing
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments; clap exits with usage on bad input
    let args = Args::parse();

    // Load before logging is set up so the config can pick the level
    let config = config_loader::load_config_or_default(args.config.as_deref())
        .wrap_err("Failed to load configuration")?;

    let default_level = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone().unwrap_or_else(|| "info".to_string())
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match &args.config {
        Some(path) => info!("Configuration file: {:?}", path),
        None => info!("No configuration file given, using default graph settings"),
    }
    info!("Trace file: {:?}", args.trace);
    info!("Server: {}", args.server);
    info!("Output file: {:?}", args.output);

    let conversion = Conversion {
        format: orchestrator::resolve_format(args.format, &args.output),
        trace_path: args.trace,
        endpoint: args.server,
        output_path: args.output,
        config,
    };

    let summary = orchestrator::run(&conversion)?;

    info!(
        "Conversion completed: {} bursts, {} transfers, {} KiB",
        summary.bursts, summary.transfers, summary.total_kib
    );
    Ok(())
}
