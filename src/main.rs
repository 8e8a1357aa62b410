//! # Main — CLI entry point
//!
//! Parses the command line, initializes structured logging and the rayon
//! pool, then routes subcommands to the execution functions in `cli`.
//!
//! ## Global options
//!
//! - `--params` / `KUMMER5_PARAMS`: TOML parameter table (start vectors and
//!   √5 endomorphism polynomials per curve).
//! - `--h`, `--m`: curve and multiplier selection.
//! - `--threads`: rayon pool size (defaults to all logical cores).
//! - `LOG_FORMAT=json`: structured JSON logs instead of human-readable.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "kummer5",
    about = "Deterministic primality tests for 4*m^2*5^n - 1 via a Kummer surface sqrt(5) endomorphism"
)]
struct Cli {
    /// Path to the TOML parameter table
    #[arg(long, env = "KUMMER5_PARAMS")]
    params: PathBuf,

    /// Curve selector h of y^2 = x^5 + h (supported: 2, 3, 31, 10)
    #[arg(long, default_value_t = 10)]
    h: u32,

    /// Multiplier m in 4*m^2*5^n - 1 (supported: 1, 3, 7, 11)
    #[arg(long, default_value_t = 3)]
    m: u32,

    /// Number of rayon worker threads (defaults to all logical cores)
    #[arg(long)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single candidate 4*m^2*5^n - 1
    Test {
        /// Exponent n (n >= 1; the published tables target odd n)
        #[arg(long)]
        n: u32,
    },
    /// Print the verdict table over a range of n
    Table {
        /// Start of the range (inclusive)
        #[arg(long, default_value_t = 1)]
        min_n: u32,
        /// End of the range (inclusive)
        #[arg(long, default_value_t = 499)]
        max_n: u32,
        /// Also test even n (skipped by default)
        #[arg(long)]
        include_even: bool,
        /// Emit one JSON object per line instead of the text table
        #[arg(long)]
        json: bool,
    },
    /// Parse and validate a parameter table file
    Validate,
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machines, stderr text otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads)?;

    match &cli.command {
        Commands::Test { n } => cli::run_test(&cli, *n),
        Commands::Table {
            min_n,
            max_n,
            include_even,
            json,
        } => cli::run_table(&cli, *min_n, *max_n, *include_even, *json),
        Commands::Validate => cli::run_validate(&cli),
    }
}
