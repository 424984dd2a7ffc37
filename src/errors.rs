//! Construction errors

use crate::float_types::Real;

/// Everything that can go wrong while building a [`MobiusStrip`](crate::MobiusStrip).
///
/// Evaluation never fails: numerical blow-ups show up as `NaN`/`Inf` in the
/// returned scalars instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MobiusError {
    /// (InvalidParameter) A construction parameter is out of its domain
    #[error("(InvalidParameter) `{name}` = {value} {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
}

impl MobiusError {
    pub(crate) const fn invalid(name: &'static str, value: Real, reason: &'static str) -> Self {
        MobiusError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
