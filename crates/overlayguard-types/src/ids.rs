//! Stable identifiers for checks, violation codes and built-in presets.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_OVERLAY_ACKNOWLEDGED: &str = "overlay.acknowledged";
pub const CHECK_LOCALIZATION_BUG_ID: &str = "localization.bug_id";

// Codes: overlay.acknowledged
pub const CODE_MISSING_OVERLAYABLE_ACK: &str = "missing_overlayable_ack";

// Codes: localization.bug_id
pub const CODE_MISSING_TRANSLATION_BUG_ID: &str = "missing_translation_bug_id";

// Presets
pub const PRESET_OVERLAYABLE: &str = "overlayable";
pub const PRESET_WIFI_UPLOAD: &str = "wifi-upload";

/// Schema identifier accepted in policy files.
pub const SCHEMA_POLICY_V1: &str = "overlayguard.policy.v1";
