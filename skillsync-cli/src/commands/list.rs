//! `skillsync list` — show manifest skills as a table.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use skillsync_core::manifest;

/// Arguments for `skillsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the skills manifest.
    #[arg(long, default_value = "skills-manifest.yaml")]
    pub manifest: PathBuf,
}

#[derive(Tabled)]
struct SkillRow {
    #[tabled(rename = "skill")]
    name: String,
    #[tabled(rename = "repo")]
    repo: String,
    #[tabled(rename = "branch")]
    branch: String,
    #[tabled(rename = "path")]
    path: String,
    #[tabled(rename = "mode")]
    mode: String,
    #[tabled(rename = "destination")]
    destination: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let manifest = manifest::load(&self.manifest)?;

        if manifest.skills.is_empty() {
            println!("No skills configured in manifest");
            return Ok(());
        }

        let rows: Vec<SkillRow> = manifest
            .skills
            .iter()
            .map(|skill| SkillRow {
                name: skill.name.to_string(),
                repo: skill.source.repo.clone(),
                branch: skill.source.branch.clone(),
                path: skill.source.path.clone(),
                mode: if skill.source.is_directory() {
                    "directory"
                } else {
                    "file"
                }
                .to_string(),
                destination: skill.destination.display().to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
