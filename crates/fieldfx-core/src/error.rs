use thiserror::Error;

/// Errors raised while loading or validating an [`crate::EffectConfig`].
///
/// The simulation itself never fails; only configuration handed in by the
/// embedder can be rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse effect config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("unknown animation variant `{0}`")]
    UnknownVariant(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
