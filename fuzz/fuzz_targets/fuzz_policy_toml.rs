//! Fuzz target for policy file parsing and resolution.
//!
//! Goal: arbitrary policy text should **never panic**. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_toml
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64 * 1024 {
        return;
    }
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = overlayguard_settings::parse_policy_toml(text) {
        let _ = overlayguard_settings::resolve_policy(cfg);
    }
});
