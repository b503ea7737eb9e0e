//! Caller Trace CLI
//!
//! Inspect how symbols are split and how captured stacks render under
//! each format verb.

use anyhow::Result;
use caller_trace::commands::{
    display_verbs, display_version, execute_capture, execute_parse, CaptureArgs, ParseArgs,
};
use clap::{Parser, Subcommand};
use env_logger::Env;

/// Caller Trace - call stack capture and format verbs
#[derive(Parser, Debug)]
#[command(name = "caller-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Split qualified symbols into function name, import path and package name
    Parse {
        /// Symbols to split (e.g., example.com/sample/a.F.G.func1)
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Treat symbols as demangled Rust paths (e.g., my_crate::net::Server::accept)
        #[arg(long)]
        rust: bool,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Capture and print this process's call stack
    Capture {
        /// Number of frames to skip above the capture site
        #[arg(short, long, default_value = "0")]
        skip: usize,

        /// Format specifier (%s, %+s, %d, %n, %P, %+P, %v, %+v)
        #[arg(short, long, env = "CALLER_TRACE_FORMAT")]
        format: Option<String>,

        /// One frame per line instead of a single bracketed line
        #[arg(long)]
        lines: bool,

        /// Print a JSON report
        #[arg(long, conflicts_with = "lines")]
        json: bool,
    },

    /// Display the format verb table
    Verbs,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    let out = match cli.command {
        Commands::Parse {
            symbols,
            rust,
            json,
        } => execute_parse(&ParseArgs {
            symbols,
            rust,
            json,
        })?,

        Commands::Capture {
            skip,
            format,
            lines,
            json,
        } => {
            let args = CaptureArgs::from_cli(skip, format.as_deref(), lines, json)?;
            execute_capture(&args)?
        }

        Commands::Verbs => display_verbs(),

        Commands::Version => display_version(),
    };

    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }

    Ok(())
}
