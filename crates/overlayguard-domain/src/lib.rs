//! Pure policy evaluation (no IO).
//!
//! Input: a commit context (changed paths, message, upstream flag) and a rule set
//! constructed elsewhere.
//! Output: an allow/deny decision with ordered violations.

#![forbid(unsafe_code)]

pub mod classify;
pub mod marker;
pub mod model;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use classify::{SurfaceHit, classify, detect_changes};
pub use engine::evaluate;
pub use marker::has_marker;
