use crate::PolicyError;
use crate::model::{PolicyFileV1, RuleConfig, SurfaceConfig};
use overlayguard_domain::model::{PolicyRule, ResourceSurface, RuleScope, RuleSet, SurfaceMatcher};
use overlayguard_types::{RepoPath, ids};
use std::collections::{BTreeMap, BTreeSet};

/// A validated policy, ready for evaluation.
#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub name: String,
    pub upstream_remote: String,
    pub rules: RuleSet,
}

pub fn resolve_policy(cfg: PolicyFileV1) -> Result<ResolvedPolicy, PolicyError> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_POLICY_V1
    {
        return Err(PolicyError::UnsupportedSchema {
            found: schema.to_string(),
            expected: ids::SCHEMA_POLICY_V1,
        });
    }

    if cfg.surfaces.is_empty() {
        return Err(PolicyError::NoSurfaces(cfg.name));
    }

    let base = RepoPath::new(&cfg.base_dir);

    let mut surfaces = Vec::with_capacity(cfg.surfaces.len());
    let mut known: BTreeSet<&str> = BTreeSet::new();
    for sc in &cfg.surfaces {
        if !known.insert(sc.name.as_str()) {
            return Err(PolicyError::DuplicateSurface(sc.name.clone()));
        }
        surfaces.push(resolve_surface(&base, sc)?);
    }

    let mut rules = Vec::with_capacity(cfg.rules.len());
    let mut rule_ids: BTreeSet<&str> = BTreeSet::new();
    for rc in &cfg.rules {
        if !rule_ids.insert(rc.id.as_str()) {
            return Err(PolicyError::DuplicateRule(rc.id.clone()));
        }
        rules.push(resolve_rule(&base, &known, rc)?);
    }

    Ok(ResolvedPolicy {
        name: cfg.name.clone(),
        upstream_remote: cfg.upstream_remote.clone(),
        rules: RuleSet { surfaces, rules },
    })
}

fn resolve_surface(base: &RepoPath, sc: &SurfaceConfig) -> Result<ResourceSurface, PolicyError> {
    let matcher = match (sc.file.as_deref(), sc.dir.as_deref()) {
        (Some(file), None) => SurfaceMatcher::file(base.join(file)),
        (None, Some(dir)) => SurfaceMatcher::directory(base.join(dir)),
        _ => return Err(PolicyError::AmbiguousMatcher(sc.name.clone())),
    };
    Ok(ResourceSurface::new(sc.name.clone(), matcher))
}

fn resolve_rule(
    base: &RepoPath,
    known: &BTreeSet<&str>,
    rc: &RuleConfig,
) -> Result<PolicyRule, PolicyError> {
    if rc.marker.trim().is_empty() {
        return Err(PolicyError::EmptyMarker(rc.id.clone()));
    }

    let check_surface = |surface: &str| -> Result<(), PolicyError> {
        if known.contains(surface) {
            Ok(())
        } else {
            Err(PolicyError::UnknownSurface {
                rule: rc.id.clone(),
                surface: surface.to_string(),
            })
        }
    };

    let scope = match &rc.surfaces {
        None => RuleScope::All,
        Some(names) if names.is_empty() => return Err(PolicyError::EmptyScope(rc.id.clone())),
        Some(names) => {
            for name in names {
                check_surface(name)?;
            }
            RuleScope::Surfaces(names.clone())
        }
    };

    let mut reference_overrides = BTreeMap::new();
    for (surface, file) in &rc.reference_overrides {
        check_surface(surface)?;
        reference_overrides.insert(surface.clone(), base.join(file));
    }

    Ok(PolicyRule {
        check_id: rc.id.clone(),
        code: rc.code.clone(),
        marker: rc.marker.trim().to_string(),
        scope,
        reference: rc.reference.as_deref().map(|r| base.join(r)),
        reference_overrides,
        halt_on_violation: rc.halt,
        template: rc.template.clone(),
    })
}
