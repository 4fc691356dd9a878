//! Loop resistance and self-inductance of a D-shaped current centre line.
//!
//! The theta factor is the normalized arc integral `∮ dl/(2π r)` over the
//! straight leg and the three tangent arcs; the arc pieces reduce to the
//! closed-form [`lambda_term`], which switches branch on the sign of
//! `1 - ω²` (arc centre inside or outside the arc radius).

use crate::error::{QuenchError, QuenchResult};
use crate::shape::CclGeometry;
use sc_core::units::constants::MU0;
use sc_core::ensure_finite;
use std::f64::consts::PI;

/// Closed-form arc integral term.
///
/// `tau` is the cosine of the arc boundary angle, `omega` the ratio of the
/// arc-centre radius to the arc radius.
pub fn lambda_term(tau: f64, omega: f64) -> QuenchResult<f64> {
    let p = 1.0 - omega * omega;
    if p == 0.0 || tau + omega == 0.0 {
        return Err(QuenchError::Domain {
            what: "arc term denominator",
            value: omega,
        });
    }
    let value = if p < 0.0 {
        let arg = (1.0 + omega * tau) / (tau + omega);
        if arg.abs() > 1.0 {
            return Err(QuenchError::Domain {
                what: "arc term arcsine argument",
                value: arg,
            });
        }
        arg.asin() / (-p).sqrt()
    } else {
        let radicand = p * (1.0 - tau * tau);
        if radicand < 0.0 {
            return Err(QuenchError::Domain {
                what: "arc term radicand",
                value: radicand,
            });
        }
        let arg = 2.0 * (1.0 + tau * omega - radicand.sqrt()) / (tau + omega);
        if arg <= 0.0 {
            return Err(QuenchError::Domain {
                what: "arc term logarithm argument",
                value: arg,
            });
        }
        arg.ln() / p.sqrt()
    };
    Ok(ensure_finite(value, "arc term")?)
}

/// Normalized `∮ dl/(2π r)` over the centre line.
pub fn theta_factor(geometry: &CclGeometry) -> QuenchResult<f64> {
    let (h, ri, ro, rm) = geometry.validated()?;
    let theta1 = geometry.theta1_deg.to_radians();
    let theta2 = PI / 2.0 + theta1;

    let a = (ro - ri) / 2.0;
    let rbar = (ro + ri) / 2.0;
    let delta = (rbar - rm) / a;
    let kappa = h / a;
    let iota = (1.0 + delta) / kappa;

    // Arc radii from the tangency conditions at the leg top and the
    // outboard midplane.
    let denom = theta1.cos() + theta1.sin() - 1.0;
    let r1 = h * (theta1.cos() + iota * (theta1.sin() - 1.0)) / denom;
    let r2 = h * (theta1.cos() - 1.0 + iota * theta1.sin()) / denom;
    let r3 = h * (1.0 - delta) / kappa;

    // Arc centres.
    let rc1 = (h / kappa) * (rbar / a + 1.0) - r1;
    let rc2 = rc1 + (r1 - r2) * theta1.cos();
    let rc3 = rc2;
    let zc2 = (r1 - r2) * theta1.sin();
    let zc3 = zc2 + r2 - r3;

    for (what, r) in [("first arc radius", r1), ("second arc radius", r2), ("third arc radius", r3)] {
        if r <= 0.0 {
            return Err(QuenchError::Geometry { what, value: r });
        }
    }

    let tau = [
        [theta1.cos(), (theta1 + theta2).cos(), -1.0],
        [1.0, theta1.cos(), (theta1 + theta2).cos()],
    ];
    let omega = [rc1 / r1, rc2 / r2, rc3 / r3];

    // Straight-leg term; floors at zero when the third arc centre sits
    // below the midplane.
    let chi1 = (zc3 + zc3.abs()) / ri;
    let mut chi2 = 0.0;
    for k in 0..3 {
        chi2 += (lambda_term(tau[1][k], omega[k])? - lambda_term(tau[0][k], omega[k])?).abs();
    }

    Ok((chi1 + 2.0 * chi2) / (2.0 * PI))
}

/// Surrogate fit for the normalized self-inductance of the D-shaped loop.
pub fn inductance_factor(geometry: &CclGeometry) -> QuenchResult<f64> {
    let d = geometry.descriptors()?;
    Ok(4.933 + 0.03728 * d.elongation + 0.06980 * d.triangularity - 3.551 * d.aspect
        + 0.7629 * d.aspect * d.aspect
        - 0.06298 * (geometry.theta1_deg / 90.0))
}

/// Self-inductance of the loop [H].
pub fn self_inductance(geometry: &CclGeometry) -> QuenchResult<f64> {
    let h = geometry.height.value;
    Ok(MU0 / PI * h * inductance_factor(geometry)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::units::m;

    fn demo_coil() -> CclGeometry {
        CclGeometry {
            height: m(8.0),
            r_inboard: m(3.0),
            r_outboard: m(9.0),
            r_peak: m(5.0),
            theta1_deg: 40.0,
        }
    }

    #[test]
    fn lambda_term_matches_the_analytic_log_branch() {
        // tau = 1 collapses the log branch to ln 2 / sqrt(1 - omega^2)
        for omega in [0.2f64, 0.5, 0.9] {
            let expected = (2.0f64).ln() / (1.0 - omega * omega).sqrt();
            let got = lambda_term(1.0, omega).unwrap();
            assert!((got - expected).abs() < 1e-12, "omega = {omega}");
        }
    }

    #[test]
    fn lambda_term_matches_the_analytic_arcsine_branch() {
        // tau = -1 with omega > 1: arcsin(-1) = -pi/2
        for omega in [1.5f64, 2.0, 4.0] {
            let expected = -PI / 2.0 / (omega * omega - 1.0).sqrt();
            let got = lambda_term(-1.0, omega).unwrap();
            assert!((got - expected).abs() < 1e-12, "omega = {omega}");
        }
    }

    #[test]
    fn lambda_term_rejects_the_branch_boundary() {
        assert!(matches!(
            lambda_term(0.5, 1.0),
            Err(QuenchError::Domain { .. })
        ));
        assert!(matches!(
            lambda_term(0.5, -0.5),
            Err(QuenchError::Domain { .. })
        ));
    }

    #[test]
    fn theta_factor_of_the_demo_coil_is_finite_and_positive() {
        let theta = theta_factor(&demo_coil()).unwrap();
        assert!(theta.is_finite() && theta > 0.0, "theta = {theta}");
        // The straight-leg term alone bounds it from below.
        assert!(theta < 10.0);
    }

    #[test]
    fn straight_leg_term_floors_at_zero_for_a_low_third_arc_centre() {
        // Hand-checked geometry with zc3 = -1.5: the straight-leg term
        // vanishes instead of going negative, leaving the arc integrals.
        let g = CclGeometry {
            height: m(6.0),
            r_inboard: m(1.0),
            r_outboard: m(11.0),
            r_peak: m(8.5),
            theta1_deg: 30.0,
        };
        let theta = theta_factor(&g).unwrap();
        assert!(theta > 1.0 && theta < 1.5, "theta = {theta}");
    }

    #[test]
    fn theta_factor_grows_for_a_tighter_inboard_leg() {
        let wide = theta_factor(&demo_coil()).unwrap();
        let mut tight_geometry = demo_coil();
        tight_geometry.r_inboard = m(2.0);
        tight_geometry.r_peak = m(4.0);
        let tight = theta_factor(&tight_geometry).unwrap();
        // dl/r integral increases as the leg moves inboard
        assert!(tight > wide);
    }

    proptest::proptest! {
        #[test]
        fn theta_factor_stays_finite_over_machine_geometries(
            h in 6.0f64..10.0,
            ri in 2.0f64..4.0,
            width in 4.0f64..7.0,
            peak_frac in 0.2f64..0.8,
            theta1 in 20.0f64..45.0,
        ) {
            let g = CclGeometry {
                height: m(h),
                r_inboard: m(ri),
                r_outboard: m(ri + width),
                r_peak: m(ri + peak_frac * width),
                theta1_deg: theta1,
            };
            match theta_factor(&g) {
                Ok(t) => proptest::prop_assert!(t.is_finite()),
                // Not every D-shape admits every first-arc angle.
                Err(QuenchError::Geometry { .. }) | Err(QuenchError::Domain { .. }) => {}
                Err(other) => panic!("{other}"),
            }
        }
    }

    #[test]
    fn inductance_of_the_demo_coil() {
        let factor = inductance_factor(&demo_coil()).unwrap();
        assert!(factor > 0.5 && factor < 1.5, "factor = {factor}");
        let l = self_inductance(&demo_coil()).unwrap();
        assert!(l > 1.0e-6 && l < 1.0e-5, "L = {l}");
    }
}
