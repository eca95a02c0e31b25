//! Bouncer CLI - Command-line interface for the Bouncer asset checklist

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, init};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bouncer")]
#[command(about = "Asset checklist for 3D scene submissions", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a scene description and print the report
    Check {
        /// Path to scene description file
        scene: String,

        /// Path to checklist config (defaults are used when omitted)
        #[arg(long)]
        config: Option<String>,

        /// Path to newline-delimited word list for the spelling checks
        #[arg(long, default_value = "words.txt")]
        words: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = parse_format)]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write the default checklist config
    Init {
        /// Config file to create
        #[arg(default_value = "bouncer.toml")]
        path: String,
    },
}

fn parse_format(s: &str) -> Result<String, String> {
    match s {
        "text" | "json" => Ok(s.to_string()),
        _ => Err(format!("unknown format '{}'; valid values: text, json", s)),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            scene,
            config,
            words,
            format,
            output,
        } => check::run(check::CheckArgs {
            scene,
            config,
            words,
            format,
            output,
        }),
        Commands::Init { path } => init::run(&path),
    }
}
