//! Error taxonomy for combat resolution

use thiserror::Error;

/// Errors raised by stat resolution, zone sampling, action resolution and loot generation
///
/// Every variant is detected synchronously. None of them is retryable from
/// inside this crate, and none is ever fixed up silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    /// Authoring data is broken (stat sum, empty loot pool, missing tier...)
    #[error("content data error in '{entity_id}': {reason}")]
    ContentData { entity_id: String, reason: String },
    /// The caller passed something out of range
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl CombatError {
    /// Build a content data error for the given entity
    pub fn content(entity_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CombatError::ContentData {
            entity_id: entity_id.into(),
            reason: reason.into(),
        }
    }

    /// Build an invalid input error for the given field
    pub fn input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CombatError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error points at bad content rather than a bad call
    pub fn is_content_error(&self) -> bool {
        matches!(self, CombatError::ContentData { .. })
    }
}

/// Reject NaN, infinities and negatives for a caller-supplied quantity
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> Result<f64, CombatError> {
    if !value.is_finite() {
        return Err(CombatError::input(field, format!("must be finite, got {value}")));
    }
    if value < 0.0 {
        return Err(CombatError::input(field, format!("must be non-negative, got {value}")));
    }
    Ok(value)
}
