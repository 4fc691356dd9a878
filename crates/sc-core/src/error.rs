use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

/// Hard failures: the current design-point evaluation is aborted and the
/// caller (the outer optimizer) decides whether the point is infeasible or
/// the run is over. Each variant carries the numeric code used by the
/// reporting channel plus the implicated values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScError {
    #[error("Non-finite value for {what}: {value} (code {code})")]
    NonFinite {
        what: &'static str,
        value: f64,
        code: u16,
    },

    #[error("Invalid argument: {what} = {value} (code {code})")]
    InvalidArg {
        what: &'static str,
        value: f64,
        code: u16,
    },

    #[error("Convergence failed: {what} after {iterations} iterations (code {code})")]
    ConvergenceFailed {
        what: &'static str,
        iterations: usize,
        code: u16,
    },

    #[error("Invariant violated: {what} = {value} (code {code})")]
    Invariant {
        what: &'static str,
        value: f64,
        code: u16,
    },
}

impl ScError {
    /// Numeric code carried by every hard failure.
    pub fn code(&self) -> u16 {
        match self {
            ScError::NonFinite { code, .. }
            | ScError::InvalidArg { code, .. }
            | ScError::ConvergenceFailed { code, .. }
            | ScError::Invariant { code, .. } => *code,
        }
    }
}
