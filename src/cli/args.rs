//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// wasm-ports - inspect port descriptors for wasm builds
///
/// Shows the artifact identity, compiler flags and link settings a port
/// contributes for a given set of options, without fetching or building.
#[derive(Parser, Debug)]
#[command(name = "wasm-ports")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WASM_PORTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Port to operate on
    #[arg(long, global = true, default_value = "contrib.glfw3")]
    pub port: String,

    /// Port option (KEY=VALUE), overrides the config file
    #[arg(short = 'o', long = "option", global = true)]
    pub options: Vec<String>,

    /// Threading override (`--pthreads` or `--pthreads=false`), defaults to config
    #[arg(
        long,
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub pthreads: Option<bool>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show port metadata and option schema
    Info {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the cached library name for the effective options
    LibName,

    /// Print compiler flags for code using the port
    Cflags,

    /// Print link settings contributed by the port
    Link,

    /// Validate the effective options and print them normalized
    Check,

    /// Verify a downloaded source archive against the expected SHA-512
    Verify {
        /// Path to the downloaded archive
        archive: PathBuf,
    },

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}

/// Output format for the info command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}
