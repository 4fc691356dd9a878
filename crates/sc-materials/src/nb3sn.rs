//! Nb3Sn critical-surface correlations (ITER-2008 parameterisation).
//!
//! The same functional form covers the standard ITER fit, the user-defined
//! variant (same parameters, caller-supplied `bc20m`/`tc0m`) and the WST
//! strand fit (different scaling constant and strain sensitivity).
//!
//! Beyond the critical surface the raw formula turns into fractional powers
//! of negative numbers. [`critical_current_density`] instead continues the
//! curve linearly below zero past the zero-margin temperature, which keeps
//! the current-sharing root-find monotone and NaN-free.

use crate::error::{MaterialError, MaterialResult};
use sc_core::ensure_positive;

/// Parameters of the ITER-2008 scaling law.
#[derive(Debug, Clone, Copy)]
pub struct Nb3SnParams {
    /// Scaling constant C [A·T/m²].
    pub csc: f64,
    /// Low-field exponent p.
    pub p: f64,
    /// High-field exponent q.
    pub q: f64,
    /// Strain fit constant Ca1.
    pub ca1: f64,
    /// Strain fit constant Ca2.
    pub ca2: f64,
    /// Residual strain component eps_0a.
    pub eps_0a: f64,
}

/// ITER standard-production parameter set.
pub const ITER_2008: Nb3SnParams = Nb3SnParams {
    csc: 1.988e10,
    p: 0.593,
    q: 2.156,
    ca1: 44.48,
    ca2: 0.0,
    eps_0a: 0.00256,
};

/// WST strand parameter set (same law, different fit).
pub const WST: Nb3SnParams = Nb3SnParams {
    csc: 8.3075e10,
    p: 0.593,
    q: 2.156,
    ca1: 50.06,
    ca2: 0.0,
    eps_0a: 0.00312,
};

/// Reference critical field and temperature for the fixed ITER/WST fits.
pub const BC20M: f64 = 32.97;
pub const TC0M: f64 = 16.06;

/// One evaluation of a critical surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JcPoint {
    /// Critical current density in the superconductor [A/m²]; negative past
    /// the zero-margin temperature (linear continuation).
    pub j_crit: f64,
    /// Critical field at the evaluation temperature and strain [T].
    pub b_crit: f64,
    /// Zero-margin temperature at the evaluation field and strain [K].
    pub t_crit: f64,
}

fn strain_function(strain: f64, par: &Nb3SnParams) -> f64 {
    let eps_sh = par.ca2 * par.eps_0a / (par.ca1 * par.ca1 - par.ca2 * par.ca2).sqrt();
    let s = par.ca1
        * ((eps_sh * eps_sh + par.eps_0a * par.eps_0a).sqrt()
            - ((strain - eps_sh) * (strain - eps_sh) + par.eps_0a * par.eps_0a).sqrt())
        - par.ca2 * strain;
    1.0 + s / (1.0 - par.ca1 * par.eps_0a)
}

/// Critical current density in the superconductor (not the strand) [A/m²].
pub fn critical_current_density(
    temperature: f64,
    field: f64,
    strain: f64,
    bc20m: f64,
    tc0m: f64,
    par: &Nb3SnParams,
) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;

    let strfun = strain_function(strain, par);
    let bc20_eps = bc20m * strfun;
    let tc0_eps = tc0m * strfun.cbrt();

    if b >= bc20_eps {
        return Err(MaterialError::FieldAboveCritical {
            field: b,
            limit: bc20_eps,
        });
    }

    // Temperature at which the critical field collapses onto the peak field.
    let t_crit = tc0_eps * (1.0 - b / bc20_eps).powf(1.0 / 1.52);

    let jc_valid = |t: f64| -> f64 {
        let t_red = t / tc0_eps;
        let b_crit = bc20_eps * (1.0 - t_red.powf(1.52));
        let b_red = b / b_crit;
        (par.csc / b)
            * strfun
            * (1.0 - t_red.powf(1.52))
            * (1.0 - t_red * t_red)
            * b_red.powf(par.p)
            * (1.0 - b_red).powf(par.q)
    };

    let j_crit = if t < t_crit {
        jc_valid(t)
    } else {
        let t_ref = 0.95 * t_crit;
        let slope = jc_valid(t_ref) / (t_crit - t_ref);
        -slope * (t - t_crit)
    };

    let t_red = (t / tc0_eps).min(1.0);
    Ok(JcPoint {
        j_crit,
        b_crit: bc20_eps * (1.0 - t_red.powf(1.52)),
        t_crit,
    })
}
