//! sc-core: stable foundation for the magnet design-point evaluation core.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float guards)
//! - diagnostics (soft-failure reporting channel + numeric code registry)
//! - design_point (named-scalar store owned by the outer optimizer)
//! - error (shared hard-failure type)

pub mod design_point;
pub mod diagnostics;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use design_point::DesignPoint;
pub use diagnostics::{DiagnosticCode, DiagnosticSink, RecordingSink, TracingSink};
pub use error::{ScError, ScResult};
pub use numeric::*;
