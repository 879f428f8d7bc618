//! Upstream-branch detection.
//!
//! The engine only sees a boolean; this module produces it from `git branch -vv`.

use anyhow::Context;
use camino::Utf8PathBuf;
use std::process::Command;
use tracing::{debug, warn};

/// Source of the "running against the upstream remote" signal.
pub trait BranchProbe {
    fn is_upstream(&self) -> anyhow::Result<bool>;
}

/// Reads the current branch's tracking remote via `git branch -vv`.
#[derive(Clone, Debug)]
pub struct GitBranchProbe {
    repo_root: Utf8PathBuf,
    remote: String,
}

impl GitBranchProbe {
    pub fn new(repo_root: impl Into<Utf8PathBuf>, remote: impl Into<String>) -> Self {
        Self {
            repo_root: repo_root.into(),
            remote: remote.into(),
        }
    }
}

impl BranchProbe for GitBranchProbe {
    fn is_upstream(&self) -> anyhow::Result<bool> {
        let output = Command::new("git")
            .current_dir(&self.repo_root)
            .args(["branch", "-vv"])
            .output()
            .context("spawn git")?;

        if !output.status.success() {
            anyhow::bail!(
                "git branch -vv returned non-zero exit status: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(tracks_upstream_remote(&stdout, &self.remote))
    }
}

/// Decide from a `git branch -vv` listing whether the current branch tracks `remote`.
///
/// Without a current-branch line the listing is treated as upstream.
pub fn tracks_upstream_remote(listing: &str, remote: &str) -> bool {
    let needle = format!("[{remote}/");
    for line in listing.lines() {
        // current branch starts with a '*'
        if line.starts_with('*') {
            return line.contains(&needle);
        }
    }
    true
}

/// Ask the probe for the upstream flag; enforce the policy when it cannot answer.
pub fn detect_upstream(probe: &dyn BranchProbe) -> bool {
    match probe.is_upstream() {
        Ok(upstream) => {
            debug!(upstream, "detected branch context");
            upstream
        }
        Err(err) => {
            warn!("could not determine branch context, enforcing policy: {err:#}");
            false
        }
    }
}
