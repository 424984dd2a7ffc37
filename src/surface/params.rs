use crate::errors::MobiusError;
use crate::float_types::Real;

/// The three numbers that fully determine a sampled strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripParameters {
    /// Radius `R` of the centre circle.
    pub radius: Real,
    /// Full width `w` of the strip; `v` runs over `[-w/2, w/2]`.
    pub width: Real,
    /// Samples `n` per parameter axis.
    pub resolution: usize,
}

impl StripParameters {
    pub const fn new(radius: Real, width: Real, resolution: usize) -> Self {
        StripParameters {
            radius,
            width,
            resolution,
        }
    }

    /// Check every parameter against its domain: `R > 0`, `w > 0` (both
    /// finite) and `n ≥ 2`.
    pub fn validate(&self) -> Result<(), MobiusError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MobiusError::invalid(
                "radius",
                self.radius,
                "must be finite and greater than zero",
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MobiusError::invalid(
                "width",
                self.width,
                "must be finite and greater than zero",
            ));
        }
        if self.resolution < 2 {
            return Err(MobiusError::invalid(
                "resolution",
                self.resolution as Real,
                "must be at least 2",
            ));
        }
        Ok(())
    }
}

impl Default for StripParameters {
    /// `R = 1`, `w = 0.4`, `n = 200`.
    fn default() -> Self {
        StripParameters::new(1.0, 0.4, 200)
    }
}
