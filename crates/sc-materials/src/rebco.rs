//! REBCO coated-conductor correlations.
//!
//! Three fits:
//! - Ginzburg-Landau REBCO (strain dependent, engineering current density)
//! - Hazelton-Zhai tape fit (layer current density scaled to the full tape)
//! - the irreversibility-field fit used on the CroCo cable path
//!
//! The Hazelton-Zhai and CroCo fits evaluate per tape, so the tape layer
//! build lives here too.

use crate::error::{MaterialError, MaterialResult};
use crate::nb3sn::JcPoint;
use sc_core::ensure_positive;

/// Layer build of one REBCO tape. All thicknesses in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RebcoTape {
    /// Superconducting layer thickness.
    pub rebco_thickness: f64,
    /// Copper stabiliser thickness.
    pub copper_thickness: f64,
    /// Hastelloy substrate thickness.
    pub hastelloy_thickness: f64,
    /// Tape width.
    pub tape_width: f64,
}

impl Default for RebcoTape {
    fn default() -> Self {
        Self {
            rebco_thickness: 1.0e-6,
            copper_thickness: 100.0e-6,
            hastelloy_thickness: 50.0e-6,
            tape_width: 4.0e-3,
        }
    }
}

impl RebcoTape {
    /// Total tape thickness.
    pub fn thickness(&self) -> f64 {
        self.rebco_thickness + self.copper_thickness + self.hastelloy_thickness
    }

    /// REBCO cross-section of one tape [m²].
    pub fn rebco_area(&self) -> f64 {
        self.rebco_thickness * self.tape_width
    }

    /// Full cross-section of one tape [m²].
    pub fn area(&self) -> f64 {
        self.thickness() * self.tape_width
    }
}

/// Parameters of the Ginzburg-Landau REBCO fit.
#[derive(Debug, Clone, Copy)]
pub struct GlRebcoParams {
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

pub const GL_REBCO: GlRebcoParams = GlRebcoParams {
    a0: 2.95e2,
    p: 0.5,
    q: 1.7,
    n: 3.33,
    v: 1.5,
    c2: -0.0191,
    c3: 0.0039,
    c4: 0.00103,
    em: 0.058e-2,
    w: 2.2,
    bc20m: 430.0,
    tc0m: 185.0,
};

/// Field above which the Ginzburg-Landau REBCO fit extrapolates beyond its
/// validation data.
pub const GL_REBCO_VALIDATED_FIELD: f64 = 14.0;

/// Ginzburg-Landau REBCO critical current density [A/m²].
pub fn gl_critical_current_density(
    temperature: f64,
    field: f64,
    strain: f64,
) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;
    let par = &GL_REBCO;

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

/// Zero-field critical temperature of the Hazelton-Zhai fit [K].
pub const HIJC_TC0M: f64 = 92.0;
/// Zero-temperature critical field of the Hazelton-Zhai fit [T].
pub const HIJC_BC20M: f64 = 138.0;
/// Layer current density scale of the Hazelton-Zhai fit [A/m²].
pub const HIJC_J0: f64 = 1.0e11;

/// Hazelton-Zhai high-current-density REBCO fit.
///
/// The correlation gives the current density in the superconducting layer;
/// the returned value is scaled down to the full tape cross-section using
/// the tape layer build.
pub fn hijc_critical_current_density(
    temperature: f64,
    field: f64,
    tape: &RebcoTape,
) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;

    if t >= HIJC_TC0M {
        return Err(MaterialError::Domain {
            what: "temperature above REBCO critical temperature",
            value: t,
        });
    }
    if b >= HIJC_BC20M {
        return Err(MaterialError::FieldAboveCritical {
            field: b,
            limit: HIJC_BC20M,
        });
    }

    let b_crit = HIJC_BC20M * (1.0 - t / HIJC_TC0M).powf(1.4);
    // Linear in B past b_crit, so the sign flips without special casing.
    let jc_layer = HIJC_J0 * (1.0 - t / HIJC_TC0M).powf(1.4) * (1.0 - b / b_crit);
    let j_crit = jc_layer * tape.rebco_thickness / tape.thickness();

    let t_crit = HIJC_TC0M * (1.0 - (b / HIJC_BC20M).powf(1.0 / 1.4));
    Ok(JcPoint {
        j_crit,
        b_crit,
        t_crit,
    })
}

/// Zero-temperature irreversibility field of the CroCo-path fit [T].
pub const CROCO_BIRR0: f64 = 132.5;
/// Critical temperature of the CroCo-path fit [K].
pub const CROCO_TC0: f64 = 90.0;

const CROCO_C: f64 = 1.829_62e8;
const CROCO_P: f64 = 0.5875;
const CROCO_Q: f64 = 1.7;
const CROCO_ALPHA: f64 = 1.541_21;
const CROCO_BETA: f64 = 1.966_79;

/// REBCO layer critical current density on the CroCo cable path [A/m²].
pub fn croco_critical_current_density(temperature: f64, field: f64) -> MaterialResult<JcPoint> {
    let t = ensure_positive(temperature, "temperature")?;
    let b = ensure_positive(field, "peak field")?;

    if b >= CROCO_BIRR0 {
        return Err(MaterialError::FieldAboveCritical {
            field: b,
            limit: CROCO_BIRR0,
        });
    }

    let t_crit = CROCO_TC0 * (1.0 - (b / CROCO_BIRR0).powf(1.0 / CROCO_ALPHA));

    let jc_valid = |t: f64| -> f64 {
        let birr = CROCO_BIRR0 * (1.0 - t / CROCO_TC0).powf(CROCO_ALPHA);
        (CROCO_C / b)
            * birr.powf(CROCO_BETA)
            * (b / birr).powf(CROCO_P)
            * (1.0 - b / birr).powf(CROCO_Q)
    };

    let j_crit = if t < t_crit {
        jc_valid(t)
    } else {
        let t_ref = 0.95 * t_crit;
        let slope = jc_valid(t_ref) / (t_crit - t_ref);
        -slope * (t - t_crit)
    };

    let t_red = (t / CROCO_TC0).min(1.0);
    Ok(JcPoint {
        j_crit,
        b_crit: CROCO_BIRR0 * (1.0 - t_red).powf(CROCO_ALPHA),
        t_crit,
    })
}
