//! The `check` use case: evaluate a pending commit against a policy.

use anyhow::Context;
use overlayguard_domain::model::CommitContext;
use overlayguard_domain::report::Decision;
use overlayguard_render::RenderedDecision;
use overlayguard_settings::ResolvedPolicy;
use overlayguard_types::RepoPath;
use tracing::debug;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub policy: &'a ResolvedPolicy,
    /// Raw commit message as authored.
    pub message: &'a str,
    /// Files changed in the commit, in the order supplied by the caller.
    pub changed_files: Vec<RepoPath>,
    pub is_upstream_branch: bool,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub decision: Decision,
    pub rendered: RenderedDecision,
}

/// Load a built-in preset by name.
pub fn load_policy(preset: &str) -> anyhow::Result<ResolvedPolicy> {
    overlayguard_settings::preset(preset).with_context(|| format!("load preset '{preset}'"))
}

/// Run the check use case: build the commit context, evaluate, render.
pub fn run_check(input: CheckInput<'_>) -> CheckOutput {
    debug!(
        policy = %input.policy.name,
        changed_files = input.changed_files.len(),
        upstream = input.is_upstream_branch,
        "evaluating commit"
    );

    let ctx = CommitContext {
        changed_paths: input.changed_files,
        message: input.message.to_string(),
        is_upstream_branch: input.is_upstream_branch,
    };

    let decision = overlayguard_domain::evaluate(&ctx, &input.policy.rules);
    if decision.allowed {
        debug!(policy = %input.policy.name, "commit allowed");
    } else {
        for v in &decision.violations {
            debug!(
                check_id = %v.check_id,
                code = %v.code,
                path = %v.matched_path,
                "commit blocked"
            );
        }
    }

    let rendered = overlayguard_render::render(&decision);
    CheckOutput { decision, rendered }
}
