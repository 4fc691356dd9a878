//! Derivative-free scalar root-finder (secant method).
//!
//! Used for the current-sharing temperature, where the residual is a
//! critical-surface evaluation and no analytic derivative exists. The
//! correlations continue linearly below zero past the zero-margin
//! temperature, so the residual always has a bracketable sign change and
//! plain secant iteration is enough.

use crate::error::{SolverError, SolverResult};
use sc_core::{ScResult, Tolerances, ensure_finite};

#[derive(Debug, Clone, Copy)]
pub struct SecantConfig {
    pub max_iterations: usize,
    /// Step tolerance on the unknown (absolute + relative).
    pub tolerances: Tolerances,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerances: Tolerances::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantResult {
    pub root: f64,
    pub iterations: usize,
    /// Residual at the accepted root.
    pub residual: f64,
}

/// Find a root of `f` starting from the two seeds `x0`, `x1`.
///
/// Converges when the step size drops below the configured tolerance;
/// stalls with equal residuals are accepted only if the residual itself is
/// already negligible relative to the seed residual.
pub fn find_root<F>(
    what: &'static str,
    mut f: F,
    x0: f64,
    x1: f64,
    config: &SecantConfig,
) -> SolverResult<SecantResult>
where
    F: FnMut(f64) -> ScResult<f64>,
{
    let tol = config.tolerances;
    let mut xa = ensure_finite(x0, what)?;
    let mut xb = ensure_finite(x1, what)?;
    let mut fa = ensure_finite(f(xa)?, what)?;
    let f_scale = fa.abs().max(1.0);
    let mut fb = ensure_finite(f(xb)?, what)?;

    for iteration in 1..=config.max_iterations {
        if fb == fa {
            if fb.abs() <= tol.rel * f_scale {
                tracing::debug!(
                    what,
                    root = xb,
                    iterations = iteration,
                    residual = fb,
                    "secant stalled at negligible residual"
                );
                return Ok(SecantResult {
                    root: xb,
                    iterations: iteration,
                    residual: fb,
                });
            }
            return Err(SolverError::Stalled {
                what,
                x: xb,
                residual: fb,
            });
        }

        let step = fb * (xb - xa) / (fb - fa);
        let xc = ensure_finite(xb - step, what)?;

        if (xc - xb).abs() <= tol.abs + tol.rel * xc.abs() {
            let residual = ensure_finite(f(xc)?, what)?;
            tracing::debug!(what, root = xc, iterations = iteration, residual, "secant converged");
            return Ok(SecantResult {
                root: xc,
                iterations: iteration,
                residual,
            });
        }

        xa = xb;
        fa = fb;
        xb = xc;
        fb = ensure_finite(f(xb)?, what)?;
    }

    Err(SolverError::NotConverged {
        what,
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_residual_converges_in_one_step() {
        let r = find_root("linear", |x| Ok(2.0 * x - 3.0), 0.0, 1.0, &SecantConfig::default())
            .unwrap();
        assert!((r.root - 1.5).abs() < 1e-9);
        assert!(r.iterations <= 2);
    }

    #[test]
    fn quadratic_residual_converges_to_requested_tolerance() {
        let cfg = SecantConfig::default();
        let r = find_root("quadratic", |x| Ok(x * x - 2.0), 1.0, 2.0, &cfg).unwrap();
        assert!((r.root - std::f64::consts::SQRT_2).abs() < 1e-6);
        assert!(r.residual.abs() < 1e-5);
    }

    #[test]
    fn flat_residual_far_from_root_stalls() {
        let err = find_root("flat", |_| Ok(1.0), 0.0, 1.0, &SecantConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Stalled { .. }));
    }

    #[test]
    fn iteration_budget_is_enforced() {
        let cfg = SecantConfig {
            max_iterations: 2,
            ..SecantConfig::default()
        };
        // Oscillatory residual the secant cannot pin down in two steps.
        let err = find_root("slow", |x: f64| Ok(x.tanh() - 0.999), 50.0, -50.0, &cfg).unwrap_err();
        assert!(matches!(
            err,
            SolverError::NotConverged { iterations: 2, .. } | SolverError::Stalled { .. }
        ));
    }

    proptest::proptest! {
        #[test]
        fn linear_roots_are_recovered(
            slope in 0.1f64..100.0,
            root in -50.0f64..50.0,
        ) {
            let r = find_root(
                "linear",
                |x| Ok(slope * (x - root)),
                root - 1.0,
                root + 2.0,
                &SecantConfig::default(),
            )
            .unwrap();
            proptest::prop_assert!((r.root - root).abs() < 1e-5);
        }
    }

    #[test]
    fn residual_errors_propagate() {
        let err = find_root(
            "failing",
            |x| sc_core::ensure_positive(-x, "negated input"),
            1.0,
            2.0,
            &SecantConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SolverError::Residual(_)));
    }
}
