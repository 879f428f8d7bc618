//! `overlayable-hook`: require an `Updated-Overlayable:` line when tracked
//! Wifi resources change.

use std::process::ExitCode;

fn main() -> ExitCode {
    overlayguard_cli::run_hook(overlayguard_cli::OVERLAYABLE_HOOK)
}
