use overlayguard_domain::report::Decision;

pub const EXIT_ALLOWED: i32 = 0;
pub const EXIT_BLOCKED: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDecision {
    pub text: String,
    pub exit_code: i32,
}

pub fn render(decision: &Decision) -> RenderedDecision {
    RenderedDecision {
        text: render_text(decision),
        exit_code: exit_code(decision),
    }
}

pub fn exit_code(decision: &Decision) -> i32 {
    if decision.allowed {
        EXIT_ALLOWED
    } else {
        EXIT_BLOCKED
    }
}

/// Remediation guidance, one block per violation in evaluation order.
///
/// Allowed decisions render to an empty string.
pub fn render_text(decision: &Decision) -> String {
    let mut out = String::new();

    for v in &decision.violations {
        out.push_str(&v.rendered_message);
        if !v.rendered_message.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}
