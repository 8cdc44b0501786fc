//! Manifest loading.
//!
//! The manifest is a single YAML document with a `skills` list. Relative
//! skill destinations are resolved against the manifest file's directory,
//! so a checkout can be synced from any working directory.

use std::path::{Path, PathBuf};

use crate::error::ManifestError;
use crate::types::Manifest;

/// Load the manifest at `path`.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed YAML.
pub fn load(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Directory that relative skill destinations are resolved against.
///
/// A bare file name like `skills-manifest.yaml` has an empty parent, which
/// maps to the current directory.
pub fn base_dir(manifest_path: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = "\
skills:
  - name: demo
    source:
      repo: octo/skills
      path: tools/
    destination: skills/demo
  - name: readme
    source:
      repo: octo/skills
      branch: dev
      path: docs/README.md
    destination: skills/readme.md
";

    #[test]
    fn load_parses_all_skills() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("skills-manifest.yaml");
        std::fs::write(&path, MANIFEST).expect("write manifest");

        let manifest = load(&path).expect("load");
        assert_eq!(manifest.skills.len(), 2);
        assert_eq!(manifest.skills[0].name.0, "demo");
        assert!(manifest.skills[0].source.is_directory());
        assert_eq!(manifest.skills[1].source.branch, "dev");
        assert!(!manifest.skills[1].source.is_directory());
    }

    #[test]
    fn load_missing_manifest_returns_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("skills-manifest.yaml");
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ManifestError::ManifestNotFound { .. }));
        assert!(err.to_string().contains("skills-manifest.yaml"));
    }

    #[test]
    fn load_malformed_yaml_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("skills-manifest.yaml");
        std::fs::write(&path, "skills: [not a skill]").expect("write manifest");

        let err = load(&path).unwrap_err();
        match err {
            ManifestError::Parse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn base_dir_of_bare_file_name_is_cwd() {
        assert_eq!(base_dir(Path::new("skills-manifest.yaml")), PathBuf::from("."));
        assert_eq!(
            base_dir(Path::new("/work/repo/skills-manifest.yaml")),
            PathBuf::from("/work/repo")
        );
    }
}
