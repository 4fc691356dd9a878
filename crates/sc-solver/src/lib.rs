//! sc-solver: scalar root-finding for the temperature-margin solve.

pub mod error;
pub mod margin;
pub mod secant;

pub use error::{SolverError, SolverResult};
pub use margin::{MarginResult, current_sharing_temperature, material_temperature_margin};
pub use secant::{SecantConfig, SecantResult, find_root};
