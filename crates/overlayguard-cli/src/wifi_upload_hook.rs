//! `wifi-upload-hook`: like `overlayable-hook`, and string changes must also
//! carry the translation bug id.

use std::process::ExitCode;

fn main() -> ExitCode {
    overlayguard_cli::run_hook(overlayguard_cli::WIFI_UPLOAD_HOOK)
}
