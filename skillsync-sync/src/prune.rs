//! Stale-file pruning for directory-mode skills.
//!
//! Two passes over the destination subtree:
//! 1. files in lexicographic order — delete anything the walk did not claim
//! 2. directories in reverse lexicographic order — delete the now-empty
//!    ones, children before parents
//!
//! The destination root itself is never removed.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

/// Delete every file under `dest` that is not in `synced`.
///
/// Returns the removed paths in deletion order. With `dry_run` set, nothing
/// is deleted but the same paths are reported.
pub fn remove_stale_files(
    dest: &Path,
    synced: &BTreeSet<PathBuf>,
    dry_run: bool,
) -> Result<Vec<PathBuf>, SyncError> {
    if !dest.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    let mut dirs = Vec::new();
    collect_tree(dest, &mut files, &mut dirs)?;
    sort_paths(&mut files);
    sort_paths(&mut dirs);

    let mut removed = Vec::new();
    for file in files {
        if synced.contains(&file) {
            continue;
        }
        if dry_run {
            tracing::info!("[dry-run] would remove stale file: {}", file.display());
        } else {
            std::fs::remove_file(&file).map_err(|e| io_err(&file, e))?;
            tracing::info!("  Removed stale file: {}", file.display());
        }
        removed.push(file);
    }

    if !dry_run {
        // Reverse lexicographic order puts a/b before a.
        for dir in dirs.iter().rev() {
            let mut entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
            if entries.next().is_some() {
                continue;
            }
            std::fs::remove_dir(dir).map_err(|e| io_err(dir, e))?;
            tracing::info!("  Removed empty directory: {}", dir.display());
        }
    }

    Ok(removed)
}

fn collect_tree(
    root: &Path,
    files: &mut Vec<PathBuf>,
    dirs: &mut Vec<PathBuf>,
) -> Result<(), SyncError> {
    for entry in std::fs::read_dir(root).map_err(|e| io_err(root, e))? {
        let entry = entry.map_err(|e| io_err(root, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| io_err(&path, e))?;
        if file_type.is_dir() {
            dirs.push(path.clone());
            collect_tree(&path, files, dirs)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

fn sort_paths(paths: &mut Vec<PathBuf>) {
    paths.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
