use crate::ScError;
use crate::diagnostics::codes;

/// Floating point type used throughout the evaluation core.
pub type Real = f64;

/// One tolerance pair for everything.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        // Root-find tolerance on the current-sharing temperature (K).
        Self {
            abs: 1e-6,
            rel: 1e-6,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ScError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ScError::NonFinite {
            what,
            value: v,
            code: codes::NON_FINITE,
        })
    }
}

/// Rejects non-positive or non-finite quantities at an evaluation boundary.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, ScError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ScError::InvalidArg {
            what,
            value: v,
            code: codes::GEOMETRY,
        })
    }
}
