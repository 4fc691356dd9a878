//! Error types for the conductor evaluation orchestrator.

use sc_core::ScError;
use sc_materials::MaterialError;
use sc_solver::SolverError;
use thiserror::Error;

pub type ConductorResult<T> = Result<T, ConductorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConductorError {
    /// Conductor build geometry that leaves no room for the cable
    /// (non-positive strand diameter, tape wider than its tube bore,
    /// jacket area gone negative). Carries the registry code.
    #[error("Conductor geometry: {what} = {value} (code {code})")]
    Geometry {
        what: &'static str,
        value: f64,
        code: u16,
    },

    #[error(transparent)]
    Material(#[from] MaterialError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Core(#[from] ScError),
}

impl From<ConductorError> for ScError {
    fn from(e: ConductorError) -> Self {
        match e {
            ConductorError::Geometry { what, value, code } => ScError::InvalidArg {
                what,
                value,
                code,
            },
            ConductorError::Material(e) => e.into(),
            ConductorError::Solver(e) => e.into(),
            ConductorError::Core(e) => e,
        }
    }
}
