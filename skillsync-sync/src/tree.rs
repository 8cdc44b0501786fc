//! Lock-step synchronization of remote trees into local destinations.
//!
//! ## `sync_file` — write protocol
//!
//! 1. Fetch the remote bytes; a fetch failure is "no change".
//! 2. Compare with the destination's current bytes → skip if identical.
//! 3. Create parent directories.
//! 4. Write to `<path>.skillsync.tmp`.
//! 5. Rename to the final path (atomic on POSIX).

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use skillsync_core::types::Skill;
use skillsync_fetch::{GithubClient, RemoteEntryKind};

use crate::error::{io_err, SyncError};
use crate::prune::remove_stale_files;
use crate::report::SkillOutcome;

/// Result of one recursive directory walk.
#[derive(Debug)]
pub struct DirSync {
    /// Local paths written this walk, in remote listing order.
    pub updated: Vec<PathBuf>,
    /// Every local file path the walk claimed, written or not.
    pub synced: BTreeSet<PathBuf>,
    /// False when any listing in the subtree could not be fetched or
    /// decoded. Callers must not prune an incomplete walk.
    pub complete: bool,
}

impl DirSync {
    fn new() -> Self {
        Self {
            updated: Vec::new(),
            synced: BTreeSet::new(),
            complete: true,
        }
    }
}

/// Mirror a single remote file into `dest`.
///
/// Returns `true` when the file was written (or would be, in dry-run).
/// Fetch failures are logged by the client and reported as "no change";
/// the destination is left untouched.
pub fn sync_file(
    client: &GithubClient,
    repo: &str,
    branch: &str,
    src_path: &str,
    dest: &Path,
    dry_run: bool,
) -> Result<bool, SyncError> {
    let Ok(content) = client.fetch_file(repo, branch, src_path) else {
        return Ok(false);
    };

    match std::fs::read(dest) {
        Ok(existing) if existing == content => {
            tracing::debug!("unchanged: {}", dest.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(io_err(dest, err)),
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", dest.display());
        return Ok(true);
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    let tmp = PathBuf::from(format!("{}.skillsync.tmp", dest.display()));
    std::fs::write(&tmp, &content).map_err(|e| io_err(&tmp, e))?;
    if let Err(err) = std::fs::rename(&tmp, dest) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(dest, err));
    }

    tracing::info!("wrote: {}", dest.display());
    Ok(true)
}

/// Recursively mirror the remote directory `src_path` into `dest`.
///
/// Entries are processed strictly in listing order. `DirSync::synced`
/// accumulates every file path this walk is responsible for, which is the
/// sole input to staleness pruning.
pub fn sync_directory(
    client: &GithubClient,
    repo: &str,
    branch: &str,
    src_path: &str,
    dest: &Path,
    dry_run: bool,
) -> Result<DirSync, SyncError> {
    let mut result = DirSync::new();

    let Ok(entries) = client.fetch_dir(repo, src_path, branch) else {
        result.complete = false;
        return Ok(result);
    };

    for entry in entries {
        // Listing names come from a remote service; never let one escape dest.
        if entry.name.is_empty()
            || entry.name.contains('/')
            || entry.name.contains('\\')
            || entry.name == "."
            || entry.name == ".."
        {
            tracing::warn!("  Skipping listing entry with unsafe name: {:?}", entry.path);
            continue;
        }
        let item_dest = dest.join(&entry.name);

        match entry.kind {
            RemoteEntryKind::File => {
                result.synced.insert(item_dest.clone());
                if sync_file(client, repo, branch, &entry.path, &item_dest, dry_run)? {
                    result.updated.push(item_dest);
                }
            }
            RemoteEntryKind::Dir => {
                let child = sync_directory(client, repo, branch, &entry.path, &item_dest, dry_run)?;
                result.updated.extend(child.updated);
                result.synced.extend(child.synced);
                result.complete &= child.complete;
            }
            RemoteEntryKind::Other => {
                tracing::debug!("skipping non-file entry: {}", entry.path);
            }
        }
    }

    Ok(result)
}

/// Synchronize one manifest skill and report what changed.
///
/// Directory-mode sources are pruned of stale local files, but only after a
/// complete walk — an incomplete remote listing leaves local files alone
/// rather than treating them all as stale. File-mode sources never prune.
pub fn sync_skill(
    client: &GithubClient,
    skill: &Skill,
    base_dir: &Path,
    dry_run: bool,
) -> Result<SkillOutcome, SyncError> {
    let dest = skill.resolved_destination(base_dir);
    let source = &skill.source;

    if source.is_directory() {
        let walk = sync_directory(
            client,
            &source.repo,
            &source.branch,
            source.dir_path(),
            &dest,
            dry_run,
        )?;
        let removed = if walk.complete {
            remove_stale_files(&dest, &walk.synced, dry_run)?
        } else {
            tracing::warn!(
                "  Skipping stale-file cleanup for '{}': incomplete remote listing",
                skill.name
            );
            Vec::new()
        };
        Ok(SkillOutcome {
            name: skill.name.clone(),
            updated: walk.updated,
            removed,
        })
    } else {
        let updated = sync_file(client, &source.repo, &source.branch, &source.path, &dest, dry_run)?;
        Ok(SkillOutcome {
            name: skill.name.clone(),
            updated: if updated { vec![dest] } else { Vec::new() },
            removed: Vec::new(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
