//! Per-run change reporting.

use std::path::PathBuf;

use serde::Serialize;

use skillsync_core::types::SkillName;

/// What changed for a single skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillOutcome {
    pub name: SkillName,
    /// Local paths written, in remote listing order.
    pub updated: Vec<PathBuf>,
    /// Local paths pruned, in deletion order.
    pub removed: Vec<PathBuf>,
}

impl SkillOutcome {
    pub fn clean(name: SkillName) -> Self {
        Self {
            name,
            updated: Vec::new(),
            removed: Vec::new(),
        }
    }

    pub fn changed(&self) -> bool {
        !self.updated.is_empty() || !self.removed.is_empty()
    }
}

/// Aggregated outcome across every manifest skill, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub skills: Vec<SkillOutcome>,
}

impl RunReport {
    /// True when no skill saw an update or removal.
    pub fn is_clean(&self) -> bool {
        self.skills.iter().all(|s| !s.changed())
    }

    /// Names of skills with at least one update or removal, manifest order.
    pub fn changed_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .filter(|s| s.changed())
            .map(|s| s.name.0.as_str())
            .collect()
    }

    pub fn updated_count(&self) -> usize {
        self.skills.iter().map(|s| s.updated.len()).sum()
    }

    pub fn removed_count(&self) -> usize {
        self.skills.iter().map(|s| s.removed.len()).sum()
    }
}
