//! Error types for the scalar root-finder.

use sc_core::ScError;
use sc_core::diagnostics::codes;
use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Iteration budget exhausted without meeting the step tolerance.
    #[error("Root-find on {what} did not converge after {iterations} iterations")]
    NotConverged { what: &'static str, iterations: usize },

    /// Two successive residuals were equal; the secant step is undefined
    /// and the residual is still above tolerance.
    #[error("Root-find on {what} stalled at x = {x} (residual {residual})")]
    Stalled {
        what: &'static str,
        x: f64,
        residual: f64,
    },

    /// The residual function itself failed.
    #[error(transparent)]
    Residual(#[from] ScError),
}

impl From<SolverError> for ScError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::NotConverged { what, iterations } => ScError::ConvergenceFailed {
                what,
                iterations,
                code: codes::NON_CONVERGENCE,
            },
            SolverError::Stalled { what, x, .. } => ScError::InvalidArg {
                what,
                value: x,
                code: codes::NON_CONVERGENCE,
            },
            SolverError::Residual(e) => e,
        }
    }
}
