//! # skillsync-sync
//!
//! Lock-step tree synchronization against remote GitHub content.
//!
//! Call [`pipeline::run`] to mirror every manifest skill in order, or
//! [`sync_skill`] for a single entry. Directory-mode skills are pruned of
//! stale files only after a complete remote walk.

pub mod error;
pub mod pipeline;
pub mod prune;
pub mod report;
pub mod tree;

pub use error::SyncError;
pub use prune::remove_stale_files;
pub use report::{RunReport, SkillOutcome};
pub use tree::{sync_directory, sync_file, sync_skill, DirSync};
