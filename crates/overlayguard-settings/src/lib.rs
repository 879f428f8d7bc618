//! Policy parsing and preset resolution.
//!
//! This crate is intentionally IO-free: policies are parsed from strings, and the
//! built-in presets are compiled into the binary.

#![forbid(unsafe_code)]

mod error;
mod model;
mod presets;
mod resolve;

pub use error::PolicyError;
pub use model::{PolicyFileV1, RuleConfig, SurfaceConfig};
pub use presets::{available_presets, preset, preset_source};
pub use resolve::ResolvedPolicy;

/// Parse a policy file (TOML) into a typed model.
pub fn parse_policy_toml(input: &str) -> Result<PolicyFileV1, PolicyError> {
    let cfg: PolicyFileV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Validate a parsed policy and resolve it into the rule set used by the engine.
pub fn resolve_policy(cfg: PolicyFileV1) -> Result<ResolvedPolicy, PolicyError> {
    resolve::resolve_policy(cfg)
}
