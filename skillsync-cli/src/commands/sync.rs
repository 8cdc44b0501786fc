//! `skillsync sync` — mirror every manifest skill and prune stale files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use skillsync_core::manifest;
use skillsync_fetch::{FetchConfig, GithubClient, DEFAULT_API_BASE, DEFAULT_RAW_BASE};
use skillsync_sync::{pipeline, RunReport};

use crate::output::OutputSinks;

/// Arguments for `skillsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the skills manifest.
    #[arg(long, default_value = "skills-manifest.yaml")]
    pub manifest: PathBuf,

    /// Fetch and compare without writing or deleting anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the change report as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Base URL of the GitHub REST API (override for GitHub Enterprise).
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Base URL of the raw-content host.
    #[arg(long, default_value = DEFAULT_RAW_BASE)]
    pub raw_base: String,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        // Manifest-missing is the one fatal condition: the Err propagates
        // out of main with exit code 1, before any network traffic.
        let manifest = manifest::load(&self.manifest)?;

        if manifest.skills.is_empty() {
            println!("No skills configured in manifest");
            return Ok(());
        }

        let base_dir = manifest::base_dir(&self.manifest);
        let token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let client = GithubClient::new(FetchConfig {
            api_base: self.api_base,
            raw_base: self.raw_base,
            token,
        });

        let report = pipeline::run(&client, &manifest, &base_dir, self.dry_run);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize report")?
            );
        } else {
            print_summary(&report, self.dry_run);
        }

        // Dry-run mutates nothing, CI output files included.
        if !self.dry_run {
            OutputSinks::from_env()
                .write(&report)
                .context("failed to write CI outputs")?;
        }

        Ok(())
    }
}

fn print_summary(report: &RunReport, dry_run: bool) {
    println!();
    if report.is_clean() {
        println!("All skills are up to date");
        return;
    }

    let prefix = if dry_run { "[dry-run] " } else { "" };
    println!(
        "{prefix}Updated {} file(s), removed {} file(s):",
        report.updated_count(),
        report.removed_count(),
    );
    for outcome in &report.skills {
        for path in &outcome.updated {
            println!("  {} {}", "+".green(), path.display());
        }
        for path in &outcome.removed {
            println!("  {} {}", "-".red(), path.display());
        }
    }
}
