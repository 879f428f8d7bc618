use overlayguard_types::RepoPath;
use std::collections::BTreeMap;

/// Placeholder replaced by the changed file that triggered a rule.
pub const PLACEHOLDER_CHANGED_FILE: &str = "{changed_file}";
/// Placeholder replaced by the rule's reference file for the matched surface.
pub const PLACEHOLDER_REFERENCE_FILE: &str = "{reference_file}";

/// How a resource surface recognizes a changed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceMatcher {
    /// Exact repo-relative file.
    File(RepoPath),
    /// Directory prefix; always stored with a trailing `/`.
    Directory(RepoPath),
}

impl SurfaceMatcher {
    pub fn file(path: impl Into<RepoPath>) -> Self {
        SurfaceMatcher::File(path.into())
    }

    pub fn directory(path: impl Into<RepoPath>) -> Self {
        SurfaceMatcher::Directory(path.into().as_dir_prefix())
    }

    pub fn matches(&self, path: &RepoPath) -> bool {
        match self {
            SurfaceMatcher::File(file) => path == file,
            SurfaceMatcher::Directory(dir) => path.starts_with(dir),
        }
    }
}

/// A class of tracked files whose changes trigger policy checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceSurface {
    pub name: String,
    pub matcher: SurfaceMatcher,
}

impl ResourceSurface {
    pub fn new(name: impl Into<String>, matcher: SurfaceMatcher) -> Self {
        Self {
            name: name.into(),
            matcher,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleScope {
    All,
    Surfaces(Vec<String>),
}

impl RuleScope {
    pub fn includes(&self, surface: &str) -> bool {
        match self {
            RuleScope::All => true,
            RuleScope::Surfaces(names) => names.iter().any(|n| n == surface),
        }
    }
}

/// Binds matched surfaces to a required commit-message marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicyRule {
    pub check_id: String,
    pub code: String,
    /// Literal line prefix, compared case-insensitively.
    pub marker: String,
    pub scope: RuleScope,
    /// File the author is pointed at, unless a surface override applies.
    pub reference: Option<RepoPath>,
    pub reference_overrides: BTreeMap<String, RepoPath>,
    /// Stop evaluating later rules once this one is violated.
    pub halt_on_violation: bool,
    pub template: String,
}

impl PolicyRule {
    pub fn reference_for(&self, surface: &str) -> Option<&RepoPath> {
        self.reference_overrides
            .get(surface)
            .or(self.reference.as_ref())
    }

    pub fn render_remediation(&self, surface: &str, changed_file: &RepoPath) -> String {
        let reference = self
            .reference_for(surface)
            .map(RepoPath::as_str)
            .unwrap_or("");
        self.template
            .replace(PLACEHOLDER_CHANGED_FILE, changed_file.as_str())
            .replace(PLACEHOLDER_REFERENCE_FILE, reference)
    }
}

/// Ordered surfaces and rules. Order is significant for both.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub surfaces: Vec<ResourceSurface>,
    pub rules: Vec<PolicyRule>,
}

/// Per-invocation input, assembled by the caller before evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitContext {
    pub changed_paths: Vec<RepoPath>,
    pub message: String,
    pub is_upstream_branch: bool,
}

impl CommitContext {
    pub fn new<I, S>(changed_paths: I, message: impl Into<String>, is_upstream_branch: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            changed_paths: changed_paths.into_iter().map(RepoPath::new).collect(),
            message: message.into(),
            is_upstream_branch,
        }
    }
}
