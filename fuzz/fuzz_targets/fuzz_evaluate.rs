//! Fuzz target for policy evaluation with the built-in presets.
//!
//! Goal: evaluation should **never panic** and must be deterministic; the
//! upstream bypass must always allow.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_evaluate
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use overlayguard_domain::evaluate;
use overlayguard_domain::model::CommitContext;

#[derive(Arbitrary, Debug)]
struct EvaluateInput {
    changed_paths: Vec<String>,
    message: String,
    upload_preset: bool,
    upstream: bool,
}

fuzz_target!(|input: EvaluateInput| {
    if input.changed_paths.len() > 64 || input.message.len() > 4096 {
        return;
    }

    let name = if input.upload_preset {
        "wifi-upload"
    } else {
        "overlayable"
    };
    let Ok(policy) = overlayguard_settings::preset(name) else {
        return;
    };

    let ctx = CommitContext::new(&input.changed_paths, input.message, input.upstream);
    let first = evaluate(&ctx, &policy.rules);
    let second = evaluate(&ctx, &policy.rules);
    assert_eq!(first, second);
    assert_eq!(first.allowed, first.violations.is_empty());
    if input.upstream {
        assert!(first.allowed);
    }
});
