//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - untracked changes never being blocked
//! - marker detection being case-insensitive and line-anchored
//! - evaluation determinism and the upstream bypass

use crate::engine::evaluate;
use crate::marker::has_marker;
use crate::model::CommitContext;
use crate::test_support::{overlayable_rules, resource_path, wifi_upload_rules};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Lowercase-only repo paths; they can never fall under the tracked base directory.
fn arb_untracked_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,8}(/[a-z]{1,8}){0,3}(\\.xml|\\.java|\\.png)?").unwrap()
}

fn arb_tracked_path() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(resource_path("values/config.xml").as_str().to_string()),
        Just(resource_path("values/strings.xml").as_str().to_string()),
        Just(resource_path("values/styles.xml").as_str().to_string()),
        prop::string::string_regex("[a-z_]{1,12}\\.png")
            .unwrap()
            .prop_map(|f| resource_path("drawable/").join(&f).as_str().to_string()),
        prop::string::string_regex("[a-z_]{1,12}\\.xml")
            .unwrap()
            .prop_map(|f| resource_path("layout/").join(&f).as_str().to_string()),
    ]
}

fn arb_message() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~\n]{0,200}").unwrap()
}

/// Single line of printable ASCII.
fn arb_trailing_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,40}").unwrap()
}

/// The marker with every character's case chosen at random.
fn arb_cased_marker(marker: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), marker.len()).prop_map(move |upper| {
        marker
            .chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn untracked_changes_are_always_allowed(
        paths in prop::collection::vec(arb_untracked_path(), 0..8),
        message in arb_message(),
    ) {
        let ctx = CommitContext::new(&paths, message, false);
        prop_assert!(evaluate(&ctx, &overlayable_rules()).allowed);
        prop_assert!(evaluate(&ctx, &wifi_upload_rules()).allowed);
    }

    #[test]
    fn line_start_marker_satisfies_ack_rule(
        body in prop::string::string_regex("[a-z ]{0,40}").unwrap(),
        marker in arb_cased_marker("updated-overlayable"),
        leading in prop::string::string_regex("[ \t]{0,4}").unwrap(),
        trailing in arb_trailing_text(),
        path in arb_tracked_path(),
    ) {
        let message = format!("{body}\n{leading}{marker}{trailing}\n");
        prop_assert!(has_marker(&message, "updated-overlayable"));

        let ctx = CommitContext::new([path], message, false);
        prop_assert!(evaluate(&ctx, &overlayable_rules()).allowed);
    }

    #[test]
    fn mid_line_marker_never_counts(
        prefix in prop::string::string_regex("[a-zA-Z]{1,10} ").unwrap(),
        marker in arb_cased_marker("updated-overlayable"),
        trailing in arb_trailing_text(),
        path in arb_tracked_path(),
    ) {
        let message = format!("{prefix}{marker}{trailing}");
        prop_assert!(!has_marker(&message, "updated-overlayable"));

        let ctx = CommitContext::new([path], message, false);
        let decision = evaluate(&ctx, &overlayable_rules());
        prop_assert!(!decision.allowed);
        prop_assert_eq!(decision.violations.len(), 1);
    }

    #[test]
    fn evaluation_is_deterministic(
        paths in prop::collection::vec(prop_oneof![arb_tracked_path(), arb_untracked_path()], 0..8),
        message in arb_message(),
        upstream in any::<bool>(),
    ) {
        let ctx = CommitContext::new(&paths, message, upstream);
        let rules = wifi_upload_rules();
        prop_assert_eq!(evaluate(&ctx, &rules), evaluate(&ctx.clone(), &rules));
    }

    #[test]
    fn upstream_branch_is_always_allowed(
        paths in prop::collection::vec(arb_tracked_path(), 0..8),
        message in arb_message(),
    ) {
        let ctx = CommitContext::new(&paths, message, true);
        let decision = evaluate(&ctx, &wifi_upload_rules());
        prop_assert!(decision.allowed);
        prop_assert!(decision.violations.is_empty());
    }

    #[test]
    fn tracked_change_without_markers_is_blocked(
        paths in prop::collection::vec(arb_tracked_path(), 1..8),
        message in prop::string::string_regex("[a-z \n]{0,80}").unwrap(),
    ) {
        let ctx = CommitContext::new(&paths, message, false);
        let decision = evaluate(&ctx, &wifi_upload_rules());
        prop_assert!(!decision.allowed);
        // The bug-id rule halts evaluation, so at most one rule is ever reported.
        prop_assert_eq!(decision.violations.len(), 1);
    }
}
