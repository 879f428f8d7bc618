use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Canonical repo-relative path used for changed files and resource surfaces.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - a trailing `/` is preserved, since directory prefixes rely on it
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        // Avoid empty path; keep it explicit.
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    pub fn is_dir_prefix(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Returns the same path with exactly one trailing `/`.
    pub fn as_dir_prefix(&self) -> RepoPath {
        if self.is_dir_prefix() {
            self.clone()
        } else {
            RepoPath(format!("{}/", self.0))
        }
    }

    pub fn join(&self, segment: &str) -> RepoPath {
        let segment = RepoPath::new(segment);
        if self.0 == "." {
            return segment;
        }
        let base = Utf8Path::new(self.as_str());
        let joined = RepoPath::new(base.join(segment.as_str()).as_str());
        if segment.is_dir_prefix() {
            joined.as_dir_prefix()
        } else {
            joined
        }
    }

    pub fn starts_with(&self, prefix: &RepoPath) -> bool {
        self.0.starts_with(prefix.as_str())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RepoPath {
    fn from(value: String) -> Self {
        RepoPath::new(value)
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}

impl From<RepoPath> for String {
    fn from(value: RepoPath) -> Self {
        value.0
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}
