//! CI output sinks — GitHub Actions key=value outputs and step summary.
//!
//! Both files are appended to, never truncated: the host environment owns
//! them and other steps may have written there first.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use skillsync_sync::RunReport;

/// Where machine and human run reports land, if anywhere.
///
/// Resolved from the environment exactly once at the CLI boundary; nothing
/// below this layer reads environment state.
#[derive(Debug, Clone, Default)]
pub struct OutputSinks {
    pub outputs_path: Option<PathBuf>,
    pub summary_path: Option<PathBuf>,
}

impl OutputSinks {
    pub fn from_env() -> Self {
        Self {
            outputs_path: env_path("GITHUB_OUTPUT"),
            summary_path: env_path("GITHUB_STEP_SUMMARY"),
        }
    }

    /// Append the machine-readable lines and the markdown summary to
    /// whichever sinks are configured.
    pub fn write(&self, report: &RunReport) -> Result<()> {
        if let Some(path) = &self.outputs_path {
            append(path, &render_outputs(report))?;
        }
        if let Some(path) = &self.summary_path {
            append(path, &render_summary(report, &Utc::now().to_rfc3339()))?;
        }
        Ok(())
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn append(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open output file '{}'", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("cannot append to '{}'", path.display()))?;
    Ok(())
}

/// `updated=<bool>` plus the changed skill names, joined the way the
/// consuming workflow splits them.
fn render_outputs(report: &RunReport) -> String {
    let changed = report.changed_skills();
    format!("updated={}\nskills={}\n", !changed.is_empty(), changed.join(", "))
}

fn render_summary(report: &RunReport, timestamp: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## Skill sync");
    let _ = writeln!(out);
    let _ = writeln!(out, "Ran at {timestamp}");
    let _ = writeln!(out);

    if report.is_clean() {
        let _ = writeln!(out, "All skills are up to date.");
        return out;
    }

    for outcome in report.skills.iter().filter(|s| s.changed()) {
        let _ = writeln!(out, "### {}", outcome.name);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} updated, {} removed",
            outcome.updated.len(),
            outcome.removed.len()
        );
        let _ = writeln!(out);
        for path in &outcome.updated {
            let _ = writeln!(out, "- `+ {}`", path.display());
        }
        for path in &outcome.removed {
            let _ = writeln!(out, "- `- {}`", path.display());
        }
        let _ = writeln!(out);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use skillsync_core::types::SkillName;
    use skillsync_sync::SkillOutcome;
    use tempfile::TempDir;

    fn changed_report() -> RunReport {
        RunReport {
            skills: vec![
                SkillOutcome {
                    name: SkillName::from("demo"),
                    updated: vec![PathBuf::from("skills/demo/a.txt")],
                    removed: vec![PathBuf::from("skills/demo/old.txt")],
                },
                SkillOutcome::clean(SkillName::from("quiet")),
            ],
        }
    }

    #[test]
    fn outputs_lines_for_a_changed_run() {
        let rendered = render_outputs(&changed_report());
        assert_eq!(rendered, "updated=true\nskills=demo\n");
    }

    #[test]
    fn outputs_lines_for_a_clean_run() {
        let rendered = render_outputs(&RunReport::default());
        assert_eq!(rendered, "updated=false\nskills=\n");
    }

    #[test]
    fn outputs_join_multiple_skills_with_comma_space() {
        let mut report = changed_report();
        report.skills.push(SkillOutcome {
            name: SkillName::from("extra"),
            updated: vec![PathBuf::from("x")],
            removed: vec![],
        });
        assert!(render_outputs(&report).contains("skills=demo, extra\n"));
    }

    #[test]
    fn summary_lists_changed_skills_only() {
        let rendered = render_summary(&changed_report(), "2026-08-05T00:00:00+00:00");
        assert!(rendered.contains("### demo"));
        assert!(rendered.contains("1 updated, 1 removed"));
        assert!(rendered.contains("- `+ skills/demo/a.txt`"));
        assert!(rendered.contains("- `- skills/demo/old.txt`"));
        assert!(!rendered.contains("quiet"));
    }

    #[test]
    fn summary_notes_a_clean_run() {
        let rendered = render_summary(&RunReport::default(), "2026-08-05T00:00:00+00:00");
        assert!(rendered.contains("All skills are up to date."));
    }

    #[test]
    fn sinks_append_rather_than_overwrite() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("outputs.txt");
        std::fs::write(&path, "earlier-step=1\n").expect("seed");

        let sinks = OutputSinks {
            outputs_path: Some(path.clone()),
            summary_path: None,
        };
        sinks.write(&changed_report()).expect("write");

        let contents = std::fs::read_to_string(&path).expect("read");
        assert!(contents.starts_with("earlier-step=1\n"));
        assert!(contents.ends_with("updated=true\nskills=demo\n"));
    }
}
