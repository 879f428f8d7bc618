//! Fuzz target for commit-message marker detection.
//!
//! Goal: marker scanning should **never panic**, and a marker placed on its own
//! line must always be found regardless of what surrounds it.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_marker_scanner
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use overlayguard_domain::has_marker;

#[derive(Arbitrary, Debug)]
struct MarkerInput {
    message: String,
    marker: String,
    trailing: String,
}

fuzz_target!(|input: MarkerInput| {
    if input.message.len() > 4096 || input.marker.len() > 64 {
        return;
    }

    let _ = has_marker(&input.message, &input.marker);

    // Restrict the invariant check to single-line markers whose lowercase form is stable.
    let splits = |c: char| c.is_control() || matches!(c, '\u{2028}' | '\u{2029}');
    let marker = input.marker.trim();
    if marker.is_empty()
        || !marker.is_ascii()
        || marker.contains(splits)
        || input.trailing.contains(splits)
    {
        return;
    }
    let appended = format!("{}\n{}{}", input.message, marker, input.trailing);
    assert!(has_marker(&appended, marker));
});
