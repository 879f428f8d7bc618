use crate::model::{PolicyRule, ResourceSurface, RuleScope, RuleSet, SurfaceMatcher};
use overlayguard_types::{RepoPath, ids};
use std::collections::BTreeMap;

pub const BASE_DIR: &str = "service/ServiceWifiResources/res/";

pub fn resource_path(relative: &str) -> RepoPath {
    RepoPath::new(BASE_DIR).join(relative)
}

fn file(name: &str, relative: &str) -> ResourceSurface {
    ResourceSurface::new(name, SurfaceMatcher::file(resource_path(relative)))
}

fn dir(name: &str, relative: &str) -> ResourceSurface {
    ResourceSurface::new(name, SurfaceMatcher::directory(resource_path(relative)))
}

pub fn ack_rule() -> PolicyRule {
    PolicyRule {
        check_id: ids::CHECK_OVERLAY_ACKNOWLEDGED.to_string(),
        code: ids::CODE_MISSING_OVERLAYABLE_ACK.to_string(),
        marker: "updated-overlayable".to_string(),
        scope: RuleScope::All,
        reference: Some(resource_path("values/overlayable.xml")),
        reference_overrides: BTreeMap::new(),
        halt_on_violation: false,
        template: "This commit has changed: \"{changed_file}\".\n\
                   Update \"{reference_file}\" and add:\n\
                   Updated-Overlayable: TRUE\n"
            .to_string(),
    }
}

pub fn bug_id_rule() -> PolicyRule {
    PolicyRule {
        check_id: ids::CHECK_LOCALIZATION_BUG_ID.to_string(),
        code: ids::CODE_MISSING_TRANSLATION_BUG_ID.to_string(),
        marker: "bug: 294871353".to_string(),
        scope: RuleScope::Surfaces(vec!["strings".to_string()]),
        reference: None,
        reference_overrides: BTreeMap::new(),
        halt_on_violation: true,
        template: "This commit has changed: \"{changed_file}\".\n\
                   Bug: 294871353\n"
            .to_string(),
    }
}

pub fn overlayable_rules() -> RuleSet {
    RuleSet {
        surfaces: vec![
            file("config", "values/config.xml"),
            file("strings", "values/strings.xml"),
            file("styles", "values/styles.xml"),
            dir("drawable", "drawable/"),
            dir("layout", "layout/"),
        ],
        rules: vec![ack_rule()],
    }
}

pub fn wifi_upload_rules() -> RuleSet {
    RuleSet {
        surfaces: vec![
            file("strings", "values/strings.xml"),
            file("config", "values/config.xml"),
            file("styles", "values/styles.xml"),
            dir("drawable", "drawable/"),
            dir("layout", "layout/"),
        ],
        rules: vec![bug_id_rule(), ack_rule()],
    }
}
