//! Numeric input constraints for the free-value assessment fields.

use crate::domain::foundation::ValidationError;

/// Min / max / step of a numeric form input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const AGE: NumericRange = NumericRange {
    field: "age",
    min: 1.0,
    max: 120.0,
    step: 1.0,
};

/// Resting blood pressure in mm Hg.
pub const BLOOD_PRESSURE: NumericRange = NumericRange {
    field: "bloodPressure",
    min: 80.0,
    max: 200.0,
    step: 1.0,
};

/// Serum cholesterol in mg/dl.
pub const CHOLESTEROL: NumericRange = NumericRange {
    field: "cholesterol",
    min: 100.0,
    max: 600.0,
    step: 1.0,
};

pub const MAX_HEART_RATE: NumericRange = NumericRange {
    field: "maxHeartRate",
    min: 60.0,
    max: 220.0,
    step: 1.0,
};

/// ST depression induced by exercise relative to rest.
pub const ST_DEPRESSION: NumericRange = NumericRange {
    field: "stDepression",
    min: 0.0,
    max: 10.0,
    step: 0.1,
};

const STEP_TOLERANCE: f64 = 1e-9;

impl NumericRange {
    /// Parses `raw` and checks it against the range and step.
    ///
    /// Mirrors what a number input accepts: a finite decimal, within
    /// `min..=max`, landing on a multiple of `step` counted from `min`.
    pub fn check(&self, raw: &str) -> Result<f64, ValidationError> {
        let value: f64 = raw.trim().parse().map_err(|_| {
            ValidationError::invalid_format(self.field, format!("'{}' is not a number", raw))
        })?;
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                self.field,
                format!("'{}' is not a number", raw),
            ));
        }
        if value < self.min || value > self.max {
            return Err(ValidationError::out_of_range(self.field, self.min, self.max, value));
        }

        let steps = (value - self.min) / self.step;
        if (steps - steps.round()).abs() > STEP_TOLERANCE * steps.abs().max(1.0) {
            return Err(ValidationError::invalid_format(
                self.field,
                format!("must be a multiple of {}", self.step),
            ));
        }
        Ok(value)
    }

    /// Like [`check`](Self::check) for whole-number fields.
    pub fn check_whole(&self, raw: &str) -> Result<u16, ValidationError> {
        let value = self.check(raw)?;
        Ok(value.round() as u16)
    }
}
