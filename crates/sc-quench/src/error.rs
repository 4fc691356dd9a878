//! Error types for the inductive quench model.

use sc_core::ScError;
use sc_core::diagnostics::codes;
use thiserror::Error;

pub type QuenchResult<T> = Result<T, QuenchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuenchError {
    /// Current-centre-line geometry that cannot describe a D-shape.
    #[error("Quench geometry: {what} = {value}")]
    Geometry { what: &'static str, value: f64 },

    /// The coil-structure decay constant coincides with the dump decay
    /// constant; the peak-force time is undefined.
    #[error("Decay constants coincide: lambda0 = {lambda0}, lambda1 = {lambda1}")]
    DecaySingularity { lambda0: f64, lambda1: f64 },

    /// Arc-term evaluation outside its mathematical domain.
    #[error("Arc term domain violated for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error(transparent)]
    Core(#[from] ScError),
}

impl From<QuenchError> for ScError {
    fn from(e: QuenchError) -> Self {
        match e {
            QuenchError::Geometry { what, value } => ScError::InvalidArg {
                what,
                value,
                code: codes::GEOMETRY,
            },
            QuenchError::DecaySingularity { lambda1, .. } => ScError::Invariant {
                what: "coincident decay constants",
                value: lambda1,
                code: codes::DECAY_SINGULARITY,
            },
            QuenchError::Domain { what, value } => ScError::InvalidArg {
                what,
                value,
                code: codes::CORRELATION_RANGE,
            },
            QuenchError::Core(e) => e,
        }
    }
}
