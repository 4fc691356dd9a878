//! sc-materials: superconductor critical-surface correlations.
//!
//! Nine materials behind one [`Material`] selector: three Nb3Sn fits, two
//! NbTi fits, three REBCO fits and Bi-2212. Each correlation returns a
//! [`JcPoint`] (critical current density, critical field, zero-margin
//! temperature) and continues linearly below zero past the zero-margin
//! temperature so the current-sharing root-find always sees a sign change.

pub mod bi2212;
pub mod error;
pub mod material;
pub mod nb3sn;
pub mod nbti;
pub mod rebco;

pub use error::{MaterialError, MaterialResult};
pub use material::Material;
pub use nb3sn::JcPoint;
pub use rebco::RebcoTape;
