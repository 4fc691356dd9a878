//! sc-conductor: cable-in-conduit conductor evaluation.
//!
//! Two evaluation paths (generic strand cable, CroCo/REBCO) plus the quench
//! protection sizer. Results come back as structured reports and can be
//! written into the named design-point store.

pub mod croco;
pub mod error;
pub mod protect;
pub mod supercon;

pub use croco::{CrocoCable, CrocoInputs, CrocoReport, QuenchModel, croco_cable, evaluate_croco};
pub use error::{ConductorError, ConductorResult};
pub use protect::{ProtectionInputs, ProtectionResult, protect};
pub use supercon::{ConductorInputs, ConductorReport, evaluate_conductor};
