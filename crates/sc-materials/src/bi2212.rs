//! Bi-2212 round-strand correlation.
//!
//! Unlike the low-temperature materials this fit works on an effective
//! field: the applied peak field scaled by an exponential temperature
//! factor. The temperature margin inverts the fit in closed form instead
//! of going through the root-finder, so both directions live here.

use crate::error::{MaterialError, MaterialResult};
use sc_core::ensure_positive;

const T_REF: f64 = 4.2;
const K_TEMP: f64 = 0.168;
const J0: f64 = 1.175e9;
const K_FIELD: f64 = 0.021_15;
const J_OFFSET: f64 = 1.288e8;

/// Strand critical current density [A/m²].
///
/// `f_hts` is a derating factor (≤ 1) on the strand value, accounting for
/// strain, radiation damage, fatigue and AC losses.
pub fn critical_current_density(
    temperature: f64,
    field: f64,
    f_hts: f64,
) -> MaterialResult<f64> {
    let t = ensure_positive(temperature, "temperature")?;
    let b_max = ensure_positive(field, "peak field")?;
    let f_hts = ensure_positive(f_hts, "strand derating factor")?;

    let b_eff = b_max / (-K_TEMP * (t - T_REF)).exp();
    Ok(f_hts * (J0 * (-K_FIELD * b_eff).exp() - J_OFFSET))
}

/// Temperature margin [K] for a strand running at `j_strand` [A/m²].
///
/// Closed-form inversion of [`critical_current_density`]; fails when the
/// operating current density sits outside the invertible branch of the fit.
pub fn temperature_margin(
    j_strand: f64,
    field: f64,
    f_hts: f64,
    t_helium: f64,
) -> MaterialResult<f64> {
    let b_max = ensure_positive(field, "peak field")?;
    let f_hts = ensure_positive(f_hts, "strand derating factor")?;
    ensure_positive(t_helium, "helium temperature")?;

    let denom = j_strand / f_hts + J_OFFSET;
    if denom <= 0.0 || J0 / denom <= 1.0 {
        return Err(MaterialError::Domain {
            what: "strand current density outside Bi-2212 inversion range",
            value: j_strand,
        });
    }
    let inner = (J0 / denom).ln() / (K_FIELD * b_max);
    if inner <= 0.0 {
        return Err(MaterialError::Domain {
            what: "effective field ratio outside Bi-2212 inversion range",
            value: inner,
        });
    }
    Ok(inner.ln() / K_TEMP + T_REF - t_helium)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jc_at_reference_temperature_uses_raw_field() {
        let jc = critical_current_density(T_REF, 12.0, 1.0).unwrap();
        let expected = J0 * (-K_FIELD * 12.0).exp() - J_OFFSET;
        assert!((jc - expected).abs() < 1.0);
    }

    #[test]
    fn margin_inverts_the_fit() {
        // Run the strand at the critical current density of a warmer
        // temperature; the margin must return exactly that delta.
        let t_helium = 4.5;
        let t_quench = 9.0;
        let jc_warm = critical_current_density(t_quench, 12.0, 0.4).unwrap();
        let margin = temperature_margin(jc_warm, 12.0, 0.4, t_helium).unwrap();
        assert!((margin - (t_quench - t_helium)).abs() < 1e-9, "margin = {margin}");
    }

    #[test]
    fn excessive_current_density_is_a_domain_error() {
        let err = temperature_margin(5.0e9, 12.0, 0.4, 4.5).unwrap_err();
        assert!(matches!(err, MaterialError::Domain { .. }));
    }
}
