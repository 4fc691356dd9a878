//! sc-quench: inductive quench model for the vacuum-vessel stress.
//!
//! A fast discharge of the coil set drives currents in the passive coil
//! structure and the vacuum vessel; the product of induced shell current
//! density and local field gives the Tresca stress in the inboard shell.

pub mod error;
pub mod inductance;
pub mod shape;
pub mod stress;

pub use error::{QuenchError, QuenchResult};
pub use inductance::{inductance_factor, lambda_term, self_inductance, theta_factor};
pub use shape::CclGeometry;
pub use stress::{
    QuenchCircuit, QuenchStressInputs, StressResult, build_circuit, vessel_stress,
    vv_stress_on_quench,
};
