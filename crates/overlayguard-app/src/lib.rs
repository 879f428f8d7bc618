//! Use case orchestration for overlayguard.
//!
//! This crate provides the application layer: it loads the policy, obtains the
//! upstream-branch signal through a probe, and coordinates the domain and render
//! layers. The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod upstream;

pub use check::{CheckInput, CheckOutput, load_policy, run_check};
pub use overlayguard_render::{EXIT_ALLOWED, EXIT_BLOCKED, RenderedDecision};
pub use upstream::{BranchProbe, GitBranchProbe, detect_upstream, tracks_upstream_remote};
