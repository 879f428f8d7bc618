//! CLI entry points for the overlayguard hooks.
//!
//! This crate is intentionally thin: it handles argument parsing, logging setup,
//! I/O, and exit codes. All decision logic lives in the `overlayguard-app` crate.

#![forbid(unsafe_code)]

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use overlayguard_app::{CheckInput, GitBranchProbe, detect_upstream, load_policy, run_check};
use overlayguard_types::{RepoPath, ids};
use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// A hook binary: which preset it enforces and how it describes itself.
#[derive(Clone, Copy, Debug)]
pub struct Hook {
    pub name: &'static str,
    pub preset: &'static str,
    pub about: &'static str,
}

pub const OVERLAYABLE_HOOK: Hook = Hook {
    name: "overlayable-hook",
    preset: ids::PRESET_OVERLAYABLE,
    about: "Check if the overlayable file has been updated",
};

pub const WIFI_UPLOAD_HOOK: Hook = Hook {
    name: "wifi-upload-hook",
    preset: ids::PRESET_WIFI_UPLOAD,
    about: "Check translation bug ids and whether the overlayable file has been updated",
};

#[derive(Parser, Debug)]
pub struct HookArgs {
    /// Commit message.
    #[arg(allow_hyphen_values = true)]
    pub commit_msg: String,

    /// Files changed in the commit.
    pub commit_files: Vec<String>,
}

pub fn run_hook(hook: Hook) -> ExitCode {
    init_tracing();

    let matches = HookArgs::command()
        .name(hook.name)
        .about(hook.about)
        .get_matches();
    let args = match HookArgs::from_arg_matches(&matches) {
        Ok(args) => args,
        Err(err) => err.exit(),
    };

    match check(hook, &args) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("overlayguard error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn check(hook: Hook, args: &HookArgs) -> anyhow::Result<u8> {
    let policy = load_policy(hook.preset)?;
    tracing::debug!(hook = hook.name, preset = %policy.name, "loaded policy");

    let probe = GitBranchProbe::new(".", policy.upstream_remote.clone());
    let is_upstream_branch = detect_upstream(&probe);

    let output = run_check(CheckInput {
        policy: &policy,
        message: &args.commit_msg,
        changed_files: args.commit_files.iter().map(RepoPath::new).collect(),
        is_upstream_branch,
    });

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.rendered.text.as_bytes())
        .context("write guidance")?;
    stdout.flush().context("flush stdout")?;

    u8::try_from(output.rendered.exit_code).context("exit code out of range")
}

/// Diagnostics go to stderr so hook guidance on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
