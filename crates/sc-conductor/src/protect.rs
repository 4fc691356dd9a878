//! Quench protection sizer.
//!
//! Sizes the winding-pack current density that an adiabatic hot spot can
//! tolerate during a dump: the dump voltage follows from discharging the
//! coil's stored energy through the dump resistor in the dump time, and the
//! allowable current density from tabulated material action integrals
//! (copper, conduit and superconductor contributions) evaluated at the
//! hot-spot temperature.

use crate::error::ConductorResult;
use sc_core::units::{Area, Current, Energy, Temperature, Time, Voltage, volt};
use sc_core::ensure_positive;

/// Copper action integral table, 1e16 A²·s/m⁴ per index kelvin-band.
const P1: [f64; 11] = [0.0, 0.8, 1.75, 2.4, 2.7, 2.95, 3.1, 3.2, 3.3, 3.4, 3.5];
/// Conduit action integral table.
const P2: [f64; 11] = [0.0, 0.05, 0.5, 1.4, 2.6, 3.7, 4.6, 5.3, 5.95, 6.55, 7.1];
/// Superconductor action integral table.
const P3: [f64; 11] = [0.0, 0.05, 0.5, 1.4, 2.6, 3.7, 4.6, 5.4, 6.05, 6.8, 7.2];

#[derive(Debug, Clone, Copy)]
pub struct ProtectionInputs {
    /// Operating current per turn.
    pub i_op: Current,
    /// Stored magnetic energy per coil.
    pub e_coil: Energy,
    /// Cable space cross-section.
    pub a_cable_space: Area,
    /// Full turn cross-section.
    pub a_turn: Area,
    /// Dump time constant.
    pub t_dump: Time,
    /// Coolant temperature.
    pub t_helium: Temperature,
    /// Allowable hot-spot temperature.
    pub t_max: Temperature,
    /// Conductor fraction of the cable space (after the coolant-channel
    /// correction).
    pub f_cond: f64,
    /// Copper fraction of the conductor.
    pub f_copper: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ProtectionResult {
    /// Peak voltage across the coil during the dump.
    pub v_dump: Voltage,
    /// Maximum winding-pack current density the hot-spot limit allows [A/m²].
    pub j_protection: f64,
}

/// Interpolate one action-integral table at the scaled hot-spot index.
///
/// The index is `1 + (t_max - t_helium)/20`, clamped to the table span
/// `[1, 11]`; values are in units of 1e16 A²·s/m⁴.
fn action_integral(table: &[f64; 11], index: f64) -> f64 {
    let index = index.clamp(1.0, 11.0);
    let lower = index.floor() as usize;
    let upper = (lower + 1).min(11);
    let frac = index - lower as f64;
    1.0e16 * (table[lower - 1] + (table[upper - 1] - table[lower - 1]) * frac)
}

pub fn protect(inputs: &ProtectionInputs) -> ConductorResult<ProtectionResult> {
    let i_op = ensure_positive(inputs.i_op.value, "operating current")?;
    let e_coil = ensure_positive(inputs.e_coil.value, "stored energy per coil")?;
    let acs = ensure_positive(inputs.a_cable_space.value, "cable space area")?;
    let a_turn = ensure_positive(inputs.a_turn.value, "turn area")?;
    let t_dump = ensure_positive(inputs.t_dump.value, "dump time")?;
    let t_helium = ensure_positive(inputs.t_helium.value, "helium temperature")?;
    let t_max = ensure_positive(inputs.t_max.value, "hot-spot temperature")?;
    let f_cond = ensure_positive(inputs.f_cond, "conductor fraction")?;
    let f_cu = ensure_positive(inputs.f_copper, "copper fraction")?;

    let v_dump = 2.0 * e_coil / (t_dump * i_op);

    let index = 1.0 + (t_max - t_helium) / 20.0;
    let ai1 = action_integral(&P1, index);
    let ai2 = action_integral(&P2, index);
    let ai3 = action_integral(&P3, index);

    let aa = v_dump * i_op / e_coil;
    let bb = (1.0 - f_cond) * f_cond * f_cu * ai1;
    let cc = (f_cu * f_cond).powi(2) * ai2;
    let dd = (1.0 - f_cu) * f_cu * f_cond.powi(2) * ai3;
    let j_protection = (aa * (bb + cc + dd)).sqrt() * acs / a_turn;

    tracing::debug!(v_dump, j_protection, index, "protection sizing");

    Ok(ProtectionResult {
        v_dump: volt(v_dump),
        j_protection,
    })
}
