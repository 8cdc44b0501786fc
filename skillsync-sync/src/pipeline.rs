//! Canonical run loop over a manifest.

use std::path::Path;

use skillsync_core::types::Manifest;
use skillsync_fetch::GithubClient;

use crate::report::{RunReport, SkillOutcome};
use crate::tree::sync_skill;

/// Sync every manifest skill, strictly in manifest order.
///
/// A skill that fails with a local I/O error is logged and contributes an
/// empty outcome; it never stops the skills after it. Remote failures are
/// already absorbed further down.
pub fn run(client: &GithubClient, manifest: &Manifest, base_dir: &Path, dry_run: bool) -> RunReport {
    let mut report = RunReport::default();

    for skill in &manifest.skills {
        tracing::info!("Syncing: {} from {}", skill.name, skill.source.repo);
        let outcome = match sync_skill(client, skill, base_dir, dry_run) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!("  Sync failed for '{}': {err}", skill.name);
                SkillOutcome::clean(skill.name.clone())
            }
        };
        report.skills.push(outcome);
    }

    report
}
