use crate::classify::detect_changes;
use crate::marker::has_marker;
use crate::model::{CommitContext, RuleSet};
use crate::report::{Decision, Violation};

pub fn evaluate(ctx: &CommitContext, rules: &RuleSet) -> Decision {
    // The policy only applies outside the upstream branch.
    if ctx.is_upstream_branch {
        return Decision::allow();
    }

    let hits = detect_changes(&ctx.changed_paths, &rules.surfaces);
    if hits.is_empty() {
        return Decision::allow();
    }

    let mut violations: Vec<Violation> = Vec::new();

    for rule in &rules.rules {
        let Some(hit) = hits.iter().find(|h| rule.scope.includes(&h.surface.name)) else {
            continue;
        };
        if has_marker(&ctx.message, &rule.marker) {
            continue;
        }

        violations.push(Violation {
            check_id: rule.check_id.clone(),
            code: rule.code.clone(),
            surface: hit.surface.name.clone(),
            matched_path: hit.path.clone(),
            marker: rule.marker.clone(),
            rendered_message: rule.render_remediation(&hit.surface.name, hit.path),
        });

        if rule.halt_on_violation {
            break;
        }
    }

    Decision::from_violations(violations)
}
