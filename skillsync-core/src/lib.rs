//! Skillsync core library — manifest types, loading, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and manifest structs
//! - [`error`] — [`ManifestError`]
//! - [`manifest`] — load / destination resolution

pub mod error;
pub mod manifest;
pub mod types;

pub use error::ManifestError;
pub use types::{Manifest, Skill, SkillName, SkillSource};
