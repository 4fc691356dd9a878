//! Temperature-margin solve.
//!
//! The current-sharing temperature is the root of
//! `j_crit(T) - j_op = 0` at fixed field and strain; the margin is that
//! temperature minus the coolant temperature. Seeds follow the historical
//! scheme: the coolant temperature and twice the coolant temperature.

use crate::error::SolverResult;
use crate::secant::{SecantConfig, find_root};
use sc_core::{ScResult, ensure_positive};
use sc_materials::Material;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginResult {
    /// Temperature at which the conductor starts sharing current [K].
    pub t_current_sharing: f64,
    /// `t_current_sharing - t_helium` [K]. May be negative: an overloaded
    /// conductor is a diagnostic for the orchestrator, not a solver failure.
    pub temp_margin: f64,
    pub iterations: usize,
}

/// Solve for the current-sharing temperature of an arbitrary correlation.
///
/// `j_crit` must be defined (and finite) above the zero-margin temperature
/// as well, continuing below zero, so the residual crosses zero even for an
/// overloaded conductor.
pub fn current_sharing_temperature<F>(
    j_op: f64,
    t_helium: f64,
    mut j_crit: F,
    config: &SecantConfig,
) -> SolverResult<MarginResult>
where
    F: FnMut(f64) -> ScResult<f64>,
{
    let j_op = ensure_positive(j_op, "operating current density")?;
    let t_helium = ensure_positive(t_helium, "helium temperature")?;

    let r = find_root(
        "current-sharing temperature",
        |t| Ok(j_crit(t)? - j_op),
        t_helium,
        2.0 * t_helium,
        config,
    )?;

    Ok(MarginResult {
        t_current_sharing: r.root,
        temp_margin: r.root - t_helium,
        iterations: r.iterations,
    })
}

/// Convenience wrapper solving against a [`Material`] critical surface at
/// fixed field and (already clamped) strain.
pub fn material_temperature_margin(
    material: &Material,
    j_op: f64,
    field: f64,
    strain: f64,
    t_helium: f64,
    config: &SecantConfig,
) -> SolverResult<MarginResult> {
    current_sharing_temperature(
        j_op,
        t_helium,
        |t| Ok(material.critical_surface(t, field, strain)?.j_crit),
        config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_linear_correlation_has_exact_margin() {
        // j(T) = j0 (1 - T/Tc): root of j(T) = j_op is T = Tc (1 - j_op/j0)
        let j0 = 1.0e9;
        let tc = 16.0;
        let j_op = 2.5e8;
        let r = current_sharing_temperature(
            j_op,
            4.5,
            |t| Ok(j0 * (1.0 - t / tc)),
            &SecantConfig::default(),
        )
        .unwrap();
        let expected = tc * (1.0 - j_op / j0);
        assert!((r.t_current_sharing - expected).abs() < 1e-6);
        assert!((r.temp_margin - (expected - 4.5)).abs() < 1e-6);
    }

    #[test]
    fn overloaded_conductor_yields_negative_margin() {
        let j0 = 1.0e9;
        let tc = 16.0;
        // Operating above the critical current density at the coolant
        // temperature: the root sits below t_helium.
        let t_helium = 6.0;
        let j_op = 1.5 * j0 * (1.0 - t_helium / tc);
        let r = current_sharing_temperature(
            j_op,
            t_helium,
            |t| Ok(j0 * (1.0 - t / tc)),
            &SecantConfig::default(),
        )
        .unwrap();
        assert!(r.temp_margin < 0.0);
    }

    #[test]
    fn nb3sn_margin_is_of_order_one_kelvin() {
        let mat = Material::IterNb3Sn;
        // ITER-like operating point: the usable margin is around a kelvin.
        let jc_op = mat.critical_surface(4.75 + 1.0, 11.8, -0.0066).unwrap();
        let r = material_temperature_margin(
            &mat,
            jc_op.j_crit,
            11.8,
            -0.0066,
            4.75,
            &SecantConfig::default(),
        )
        .unwrap();
        assert!((r.temp_margin - 1.0).abs() < 1e-4, "margin = {}", r.temp_margin);
        assert!(r.iterations <= 50);
    }

    #[test]
    fn non_positive_inputs_are_rejected() {
        let err = current_sharing_temperature(
            -1.0,
            4.5,
            |_| Ok(1.0),
            &SecantConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, crate::error::SolverError::Residual(_)));
    }
}
