use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("failed to parse policy TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown preset: {name} (expected one of: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("unsupported policy schema: {found} (expected {expected})")]
    UnsupportedSchema {
        found: String,
        expected: &'static str,
    },

    #[error("policy '{0}' declares no surfaces")]
    NoSurfaces(String),

    #[error("duplicate surface name: {0}")]
    DuplicateSurface(String),

    #[error("surface '{0}' must set exactly one of `file` or `dir`")]
    AmbiguousMatcher(String),

    #[error("duplicate rule id: {0}")]
    DuplicateRule(String),

    #[error("rule '{0}' has an empty marker")]
    EmptyMarker(String),

    #[error("rule '{0}' has an empty surface list")]
    EmptyScope(String),

    #[error("rule '{rule}' references unknown surface '{surface}'")]
    UnknownSurface { rule: String, surface: String },
}
