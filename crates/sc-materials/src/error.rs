//! Error types for the material correlation library.

use sc_core::ScError;
use sc_core::diagnostics::codes;
use thiserror::Error;

pub type MaterialResult<T> = Result<T, MaterialError>;

/// Hard failures raised by the correlation library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Material selector outside the nine known variants.
    #[error("Unknown material id {id}")]
    Unknown { id: u8 },

    /// Material routed down an evaluation path that does not support it
    /// (e.g. CroCo/REBCO through the generic cable path). This is a
    /// programming-contract violation, not a marginal design point.
    #[error("Material {material} is not valid on the {path} path")]
    UnsupportedPath {
        material: &'static str,
        path: &'static str,
    },

    /// Peak field at or above the zero-temperature critical field; the
    /// correlation has no positive-current-density region at all.
    #[error("Peak field {field} T at or above critical field {limit} T")]
    FieldAboveCritical { field: f64, limit: f64 },

    /// Correlation evaluated outside its mathematical domain (e.g. the
    /// Bi-2212 inversion asked for the log of a non-positive number).
    #[error("Correlation domain violated for {what}: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error(transparent)]
    Core(#[from] ScError),
}

impl From<MaterialError> for ScError {
    fn from(e: MaterialError) -> Self {
        match e {
            MaterialError::Unknown { id } => ScError::InvalidArg {
                what: "material id",
                value: id as f64,
                code: codes::UNKNOWN_MATERIAL,
            },
            MaterialError::UnsupportedPath { .. } => ScError::InvalidArg {
                what: "material evaluation path",
                value: f64::NAN,
                code: codes::MATERIAL_PATH,
            },
            MaterialError::FieldAboveCritical { field, .. } => ScError::InvalidArg {
                what: "peak field above critical field",
                value: field,
                code: codes::CORRELATION_RANGE,
            },
            MaterialError::Domain { what, value } => ScError::InvalidArg {
                what,
                value,
                code: codes::CORRELATION_RANGE,
            },
            MaterialError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_material_maps_to_registry_code() {
        let err: ScError = MaterialError::Unknown { id: 12 }.into();
        assert_eq!(err.code(), codes::UNKNOWN_MATERIAL);
    }
}
