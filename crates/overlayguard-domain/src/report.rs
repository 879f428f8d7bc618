use overlayguard_types::RepoPath;

/// A single unmet rule for a single matched surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub check_id: String,
    pub code: String,
    pub surface: String,
    pub matched_path: RepoPath,
    pub marker: String,
    pub rendered_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    /// In rule evaluation order.
    pub violations: Vec<Violation>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            violations: Vec::new(),
        }
    }

    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            allowed: violations.is_empty(),
            violations,
        }
    }
}
