use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Policy file schema v1.
///
/// Paths are relative to `base_dir`. Surface and rule order is significant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyFileV1 {
    /// Optional schema string for tooling (`overlayguard.policy.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    pub name: String,

    /// Resource root shared by every surface, e.g. `service/ServiceWifiResources/res/`.
    #[serde(default)]
    pub base_dir: String,

    /// Remote whose tracking branches bypass the policy.
    pub upstream_remote: String,

    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub name: String,

    /// Exact file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Directory prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub id: String,
    pub code: String,
    pub marker: String,

    /// Surface names this rule is bound to; every surface when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// surface name -> reference file used instead of `reference`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub reference_overrides: BTreeMap<String, String>,

    #[serde(default)]
    pub halt: bool,

    /// Remediation text; `{changed_file}` and `{reference_file}` are substituted.
    pub template: String,
}
