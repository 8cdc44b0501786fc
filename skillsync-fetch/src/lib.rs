//! # skillsync-fetch
//!
//! Blocking GitHub content fetcher: raw file bytes plus contents-API
//! directory listings. Every request failure is logged and surfaced as a
//! [`FetchError`]; nothing in this crate touches the filesystem.

pub mod client;
pub mod error;

pub use client::{
    FetchConfig, GithubClient, RemoteEntry, RemoteEntryKind, DEFAULT_API_BASE, DEFAULT_RAW_BASE,
};
pub use error::FetchError;
