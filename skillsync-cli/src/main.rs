//! Skillsync — mirror manifest-declared skills from GitHub.
//!
//! # Usage
//!
//! ```text
//! skillsync sync [--manifest <path>] [--dry-run] [--json]
//!                [--api-base <url>] [--raw-base <url>]
//! skillsync list [--manifest <path>]
//! ```

mod commands;
mod output;

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "skillsync",
    version,
    about = "Mirror skill files and directories from GitHub repositories",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download manifest skills and prune stale local files.
    Sync(SyncArgs),

    /// Show the skills declared in the manifest.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}

/// Message-only log format so library diagnostics (download errors,
/// removal notices, per-skill progress) read as plain console lines.
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
