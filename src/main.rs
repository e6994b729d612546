//! wasm-ports - port descriptor inspection
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wasm_ports::cli::commands::{self, PortContext};
use wasm_ports::cli::{Cli, Commands};
use wasm_ports::config::{Config, ConfigManager};
use wasm_ports::error::PortResult;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, config: &Config) {
    // 0 = warn, 1 = info, 2+ = debug
    let filter = match verbose {
        0 => EnvFilter::new("wasm_ports=warn"),
        1 => EnvFilter::new("wasm_ports=info"),
        _ => EnvFilter::new("wasm_ports=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run() -> PortResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    // Log format comes from the config, so it is read before logging starts
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    if config_manager.exists() {
        debug!("Loaded config from {}", config_manager.path().display());
    } else {
        debug!(
            "Config file not found at {}, using defaults",
            config_manager.path().display()
        );
    }

    // Config command works even when configured port options are invalid
    if let Commands::Config(args) = cli.command {
        return commands::config(args, &config_manager, &config);
    }

    let ctx = PortContext::prepare(&cli.port, &cli.options, cli.pthreads, &config)?;

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Info { format } => commands::info(&ctx, format),
        Commands::LibName => commands::lib_name(&ctx),
        Commands::Cflags => commands::cflags(&ctx),
        Commands::Link => commands::link(&ctx),
        Commands::Check => commands::check(&ctx),
        Commands::Verify { archive } => commands::verify(&ctx, &archive),
    }
}
