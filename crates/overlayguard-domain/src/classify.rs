//! Path classification against configured resource surfaces.

use crate::model::ResourceSurface;
use overlayguard_types::RepoPath;

/// Return the first surface (in configured order) that matches `path`.
pub fn classify<'a>(path: &RepoPath, surfaces: &'a [ResourceSurface]) -> Option<&'a ResourceSurface> {
    surfaces.iter().find(|s| s.matcher.matches(path))
}

/// A surface together with the first changed path that classified to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceHit<'a> {
    pub surface: &'a ResourceSurface,
    pub path: &'a RepoPath,
}

/// Classify every changed path, keeping one hit per surface.
///
/// Hits are ordered by the position of their first changed path, so the first
/// element is always the first changed path that touched any surface.
pub fn detect_changes<'a>(
    changed_paths: &'a [RepoPath],
    surfaces: &'a [ResourceSurface],
) -> Vec<SurfaceHit<'a>> {
    let mut hits: Vec<SurfaceHit<'a>> = Vec::new();

    for path in changed_paths {
        let Some(surface) = classify(path, surfaces) else {
            continue;
        };
        if hits.iter().any(|h| h.surface.name == surface.name) {
            continue;
        }
        hits.push(SurfaceHit { surface, path });
    }

    hits
}
