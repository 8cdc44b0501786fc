//! Domain types for the skills manifest.
//!
//! Local destinations use `PathBuf`; remote source paths stay `String`
//! because they are URL fragments, not filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a skill entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillName(pub String);

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SkillName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SkillName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Manifest structs
// ---------------------------------------------------------------------------

/// Where a skill's content lives on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSource {
    /// Repository in `owner/name` form.
    pub repo: String,
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Path within the repository. A trailing `/` selects directory mode.
    pub path: String,
}

fn default_branch() -> String {
    "main".to_string()
}

impl SkillSource {
    /// Whether this source denotes a directory tree rather than a single file.
    pub fn is_directory(&self) -> bool {
        self.path.ends_with('/')
    }

    /// The source path without its trailing separator, for listing calls.
    pub fn dir_path(&self) -> &str {
        self.path.trim_end_matches('/')
    }
}

/// A single skill tracked by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: SkillName,
    pub source: SkillSource,
    /// Local destination, resolved against the manifest's directory when relative.
    pub destination: PathBuf,
}

impl Skill {
    /// Absolute or base-relative destination for this skill's content.
    pub fn resolved_destination(&self, base_dir: &Path) -> PathBuf {
        if self.destination.is_absolute() {
            self.destination.clone()
        } else {
            base_dir.join(&self.destination)
        }
    }
}

/// Root of the skills manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    /// A missing or explicitly null `skills:` key reads as an empty list.
    #[serde(default, deserialize_with = "skills_or_empty")]
    pub skills: Vec<Skill>,
}

fn skills_or_empty<'de, D>(deserializer: D) -> Result<Vec<Skill>, D::Error>
where
    D: Deserializer<'de>,
{
    let skills = Option::<Vec<Skill>>::deserialize(deserializer)?;
    Ok(skills.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_skill(path: &str) -> Skill {
        Skill {
            name: SkillName::from("demo"),
            source: SkillSource {
                repo: "octo/skills".to_string(),
                branch: "main".to_string(),
                path: path.to_string(),
            },
            destination: PathBuf::from("skills/demo"),
        }
    }

    #[test]
    fn newtype_display() {
        assert_eq!(SkillName::from("pdf-tools").to_string(), "pdf-tools");
    }

    #[test]
    fn trailing_slash_selects_directory_mode() {
        assert!(demo_skill("tools/").source.is_directory());
        assert!(!demo_skill("tools/a.txt").source.is_directory());
        assert_eq!(demo_skill("tools/").source.dir_path(), "tools");
    }

    #[test]
    fn branch_defaults_to_main() {
        let yaml = "repo: octo/skills\npath: tools/\n";
        let source: SkillSource = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(source.branch, "main");
    }

    #[test]
    fn relative_destination_resolves_against_base() {
        let skill = demo_skill("tools/");
        let resolved = skill.resolved_destination(Path::new("/work/repo"));
        assert_eq!(resolved, PathBuf::from("/work/repo/skills/demo"));
    }

    #[test]
    fn absolute_destination_ignores_base() {
        let mut skill = demo_skill("tools/");
        skill.destination = PathBuf::from("/srv/skills/demo");
        let resolved = skill.resolved_destination(Path::new("/work/repo"));
        assert_eq!(resolved, PathBuf::from("/srv/skills/demo"));
    }

    #[test]
    fn null_skills_key_reads_as_empty() {
        let manifest: Manifest = serde_yaml::from_str("skills:\n").expect("parse");
        assert!(manifest.skills.is_empty());
    }

    #[test]
    fn absent_skills_key_reads_as_empty() {
        let manifest: Manifest = serde_yaml::from_str("{}").expect("parse");
        assert!(manifest.skills.is_empty());
    }

    #[test]
    fn manifest_serde_roundtrip() {
        let manifest = Manifest {
            skills: vec![demo_skill("tools/")],
        };
        let yaml = serde_yaml::to_string(&manifest).expect("serialize");
        let parsed: Manifest = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(parsed, manifest);
    }
}
