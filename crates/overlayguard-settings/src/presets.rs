use crate::{PolicyError, ResolvedPolicy, parse_policy_toml, resolve_policy};
use overlayguard_types::ids;

/// Preset policies are compiled in so hook behavior can't be changed at runtime.
///
/// Keep these small and readable.
const OVERLAYABLE: &str = include_str!("presets/overlayable.toml");
const WIFI_UPLOAD: &str = include_str!("presets/wifi-upload.toml");

pub fn available_presets() -> &'static [&'static str] {
    &[ids::PRESET_OVERLAYABLE, ids::PRESET_WIFI_UPLOAD]
}

/// Raw TOML of a built-in preset.
pub fn preset_source(name: &str) -> Option<&'static str> {
    match name {
        ids::PRESET_OVERLAYABLE => Some(OVERLAYABLE),
        ids::PRESET_WIFI_UPLOAD => Some(WIFI_UPLOAD),
        _ => None,
    }
}

pub fn preset(name: &str) -> Result<ResolvedPolicy, PolicyError> {
    let source = preset_source(name).ok_or_else(|| PolicyError::UnknownPreset {
        name: name.to_string(),
        available: available_presets().join(", "),
    })?;
    resolve_policy(parse_policy_toml(source)?)
}
