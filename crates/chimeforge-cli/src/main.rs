//! ChimeForge CLI - procedural notification chime generation
//!
//! This binary renders randomized approval chimes with the synthesis core
//! and stores them as WAV files, and can inspect the parameters a given
//! seed would draw.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod asset;
mod commands;

/// ChimeForge - Procedural Notification Chime Generator
#[derive(Parser)]
#[command(name = "chimeforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one or more chimes and write them as WAV files
    Generate {
        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// File name stem (default: chime_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Base RNG seed (default: derived from the wall clock)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Number of variations to render (seed increments per variation)
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Output sample rate in Hz
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Target peak level in dBFS
        #[arg(long, default_value = "-1.0", allow_hyphen_values = true)]
        target_db: f64,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show the spec and melody a seed would draw, without rendering
    Inspect {
        /// RNG seed to inspect
        #[arg(short, long, default_value = "0")]
        seed: u32,

        /// Override the wall-clock hour (0-23) for the day/night profile
        #[arg(long)]
        hour: Option<u32>,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out_dir,
            name,
            seed,
            count,
            sample_rate,
            target_db,
            json,
        } => commands::generate::run(
            &out_dir,
            name.as_deref(),
            seed,
            count,
            sample_rate,
            target_db,
            json,
        ),
        Commands::Inspect { seed, hour, json } => commands::inspect::run(seed, hour, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
