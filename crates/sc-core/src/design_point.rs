//! Named-scalar store for one candidate magnet design point.
//!
//! The store is owned by the surrounding optimization loop; the evaluation
//! core reads inputs from it and writes its scalar outputs back by name.
//! There is no caching and no transactional behaviour: each evaluation call
//! works on whatever snapshot it is handed.

use crate::diagnostics::codes;
use crate::{ScError, ScResult};

/// Mutable record of scalar engineering quantities for one design point.
///
/// All values are SI: kelvin, tesla, metres, square metres, amperes, joules,
/// seconds, pascals; current densities in A/m²; fractions dimensionless.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignPoint {
    // Operating conditions
    pub t_helium: f64,
    pub b_peak: f64,
    pub strain: f64,
    pub i_op_turn: f64,
    pub j_winding_pack: f64,

    // Conductor build
    pub a_cable_space: f64,
    pub a_turn: f64,
    pub f_copper: f64,
    pub f_helium: f64,
    /// Bi-2212 strand derating (strain, radiation damage, fatigue, AC losses).
    pub f_hts: f64,
    pub d_coolant_channel: f64,

    // Protection / quench
    pub t_dump: f64,
    pub e_stored_coil: f64,
    pub t_max_quench: f64,

    // Coil set
    pub n_coils: f64,
    pub n_turns: f64,

    // Outputs written back by the evaluation core
    pub j_wp_critical: f64,
    pub t_margin: f64,
    pub t_current_sharing: f64,
    pub v_dump: f64,
    pub j_protection: f64,
    pub sigma_vv_quench: f64,
}

macro_rules! named_fields {
    ($($name:ident),* $(,)?) => {
        /// Field names addressable through [`DesignPoint::get`] / [`DesignPoint::set`].
        pub const FIELD_NAMES: &'static [&'static str] = &[$(stringify!($name)),*];

        /// Read a field by name.
        pub fn get(&self, name: &str) -> Option<f64> {
            match name {
                $(stringify!($name) => Some(self.$name),)*
                _ => None,
            }
        }

        /// Write a field by name; unknown names are a hard failure.
        pub fn set(&mut self, name: &str, value: f64) -> ScResult<()> {
            match name {
                $(stringify!($name) => {
                    self.$name = value;
                    Ok(())
                })*
                _ => Err(ScError::InvalidArg {
                    what: "unknown design-point field",
                    value,
                    code: codes::GEOMETRY,
                }),
            }
        }
    };
}

impl DesignPoint {
    named_fields!(
        t_helium,
        b_peak,
        strain,
        i_op_turn,
        j_winding_pack,
        a_cable_space,
        a_turn,
        f_copper,
        f_helium,
        f_hts,
        d_coolant_channel,
        t_dump,
        e_stored_coil,
        t_max_quench,
        n_coils,
        n_turns,
        j_wp_critical,
        t_margin,
        t_current_sharing,
        v_dump,
        j_protection,
        sigma_vv_quench,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip_all_fields() {
        let mut dp = DesignPoint::default();
        for (i, name) in DesignPoint::FIELD_NAMES.iter().enumerate() {
            dp.set(name, i as f64 + 0.5).unwrap();
        }
        for (i, name) in DesignPoint::FIELD_NAMES.iter().enumerate() {
            assert_eq!(dp.get(name), Some(i as f64 + 0.5), "field {name}");
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut dp = DesignPoint::default();
        assert_eq!(dp.get("no_such_field"), None);
        let err = dp.set("no_such_field", 1.0).unwrap_err();
        assert!(matches!(err, ScError::InvalidArg { .. }));
    }
}
