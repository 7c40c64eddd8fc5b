use thiserror::Error;

/// Errors returned when parsing user-facing filter names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVibeError {
    /// The name did not match any [`crate::Purpose`].
    #[error("unknown purpose '{0}' (expected one of all, study, social, group, date)")]
    UnknownPurpose(String),
    /// The name did not match any [`crate::Preference`].
    #[error("unknown preference '{0}' (expected one of quiet, power, late, food, wifi, group)")]
    UnknownPreference(String),
}
