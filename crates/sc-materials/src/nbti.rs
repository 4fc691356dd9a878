//! NbTi critical-surface correlations.
//!
//! Two fits: the classic linear Lubell-style law and the Ginzburg-Landau
//! strain-dependent parameterisation. Both report a [`JcPoint`] and use the
//! same linear continuation past the zero-margin temperature as the Nb3Sn
//! module.

use crate::error::{MaterialError, MaterialResult};
use crate::nb3sn::JcPoint;
use sc_core::ensure_positive;

/// Scaling constant of the linear fit [A/m²].
pub const C0: f64 = 1.0e10;
/// Zero-temperature critical field of the linear fit [T].
pub const BC20M: f64 = 15.0;
/// Zero-field critical temperature of the linear fit [K].
pub const TC0M: f64 = 9.3;

/// Linear NbTi critical current density [A/m²].
pub fn critical_current_density(temperature: f64, field: f64) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;

    if b >= BC20M {
        return Err(MaterialError::FieldAboveCritical {
            field: b,
            limit: BC20M,
        });
    }

    let t_crit = TC0M * (1.0 - b / BC20M).powf(0.59);
    // Linear in T; negative past t_crit without any special casing.
    let j_crit = C0 * (1.0 - b / BC20M) * (1.0 - t / t_crit);

    let t_red = (t / TC0M).min(1.0);
    Ok(JcPoint {
        j_crit,
        b_crit: BC20M * (1.0 - t_red.powf(1.0 / 0.59)),
        t_crit,
    })
}

/// Parameters of the Ginzburg-Landau NbTi fit.
#[derive(Debug, Clone, Copy)]
pub struct GlNbTiParams {
    pub a0: f64,
    pub p: f64,
    pub q: f64,
    pub n: f64,
    pub v: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub em: f64,
    pub w: f64,
    pub bc20m: f64,
    pub tc0m: f64,
}

pub const GL_NBTI: GlNbTiParams = GlNbTiParams {
    a0: 1102.0e6,
    p: 0.49,
    q: 0.56,
    n: 1.83,
    v: 1.42,
    c2: -0.0025,
    c3: -0.0003,
    c4: -0.0001,
    em: -0.002e-2,
    w: 2.2,
    bc20m: 14.86,
    tc0m: 9.04,
};

/// Ginzburg-Landau NbTi critical current density [A/m²].
pub fn gl_critical_current_density(
    temperature: f64,
    field: f64,
    strain: f64,
) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;
    let par = &GL_NBTI;

    let e = strain - par.em;
    let strain_func = 1.0 + par.c2 * e.powi(2) + par.c3 * e.powi(3) + par.c4 * e.powi(4);
    let t_e = par.tc0m * strain_func.powf(1.0 / par.w);
    let bc20_eps = par.bc20m * strain_func;

    if b >= bc20_eps {
        return Err(MaterialError::FieldAboveCritical {
            field: b,
            limit: bc20_eps,
        });
    }

    let t_crit = t_e * (1.0 - b / bc20_eps).powf(1.0 / par.v);

    let jc_valid = |t: f64| -> f64 {
        let t_red = t / t_e;
        let b_crit = bc20_eps * (1.0 - t_red.powf(par.v));
        let b_red = b / b_crit;
        par.a0
            * (t_e * (1.0 - t_red * t_red)).powi(2)
            * b_crit.powf(par.n - 3.0)
            * b_red.powf(par.p - 1.0)
            * (1.0 - b_red).powf(par.q)
    };

    let j_crit = if t < t_crit {
        jc_valid(t)
    } else {
        let t_ref = 0.95 * t_crit;
        let slope = jc_valid(t_ref) / (t_crit - t_ref);
        -slope * (t - t_crit)
    };

    let t_red = (t / t_e).min(1.0);
    Ok(JcPoint {
        j_crit,
        b_crit: bc20_eps * (1.0 - t_red.powf(par.v)),
        t_crit,
    })
}
