//! Stable identifiers and path types shared across the overlayguard workspace.
//!
//! This crate is intentionally boring:
//! - stable string IDs for checks, codes and presets
//! - canonical repo-relative path handling

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;

pub use path::RepoPath;
