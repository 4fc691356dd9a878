//! Conductor evaluation orchestrator.
//!
//! One call takes a cable-in-conduit operating point, dispatches on the
//! superconductor variant, and produces the critical current densities,
//! the temperature margin and the protection sizing. Marginal-but-evaluable
//! conditions (clamped strain, negative margin, overloaded conductor) are
//! reported through the diagnostic sink and never abort the evaluation;
//! impossible inputs abort with a hard error.

use crate::error::{ConductorError, ConductorResult};
use crate::protect::{ProtectionInputs, protect};
use sc_core::units::{Area, Current, Energy, FluxDensity, Length, Temperature, Time, Voltage};
use sc_core::{DesignPoint, DiagnosticCode, DiagnosticSink, ScResult, ensure_positive};
use sc_materials::rebco::GL_REBCO_VALIDATED_FIELD;
use sc_materials::{Material, MaterialError, bi2212};
use sc_solver::{SecantConfig, material_temperature_margin};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy)]
pub struct ConductorInputs {
    pub material: Material,
    /// Cable space cross-section (inside the conduit).
    pub a_cable_space: Area,
    /// Full turn cross-section (conduit and insulation included).
    pub a_turn: Area,
    /// Peak field at the conductor.
    pub b_peak: FluxDensity,
    /// Helium fraction of the cable space, central channel excluded.
    pub f_helium: f64,
    /// Copper fraction of the strand.
    pub f_copper: f64,
    /// Bi-2212 strand derating factor (≤ 1) accounting for strain,
    /// radiation damage, fatigue and AC losses. Ignored by the other
    /// materials.
    pub f_hts: f64,
    /// Central coolant channel diameter (zero for none).
    pub d_coolant_channel: Length,
    /// Operating current per turn.
    pub i_op: Current,
    /// Operating winding-pack current density [A/m²].
    pub j_winding_pack: f64,
    /// Intrinsic strand strain.
    pub strain: f64,
    /// Dump time constant.
    pub t_dump: Time,
    /// Stored magnetic energy per coil.
    pub e_coil: Energy,
    /// Coolant temperature.
    pub t_helium: Temperature,
    /// Allowable hot-spot temperature for protection sizing.
    pub t_max_quench: Temperature,
}

#[derive(Debug, Clone, Copy)]
pub struct ConductorReport {
    /// Conductor fraction of the cable space after the channel correction.
    pub f_cond: f64,
    /// Critical current density in the superconductor [A/m²].
    pub j_critical_sc: f64,
    /// Critical current density averaged over the strand [A/m²].
    pub j_critical_strand: f64,
    /// Critical winding-pack current density [A/m²].
    pub j_critical_wp: f64,
    /// Critical current of the cable [A].
    pub i_critical: f64,
    /// Operating / critical current ratio.
    pub i_op_fraction: f64,
    /// Operating strand current density [A/m²].
    pub j_strand_op: f64,
    /// Temperature margin [K]; negative for an overloaded conductor.
    pub t_margin: f64,
    /// Current-sharing temperature [K].
    pub t_current_sharing: f64,
    pub v_dump: Voltage,
    /// Protection-limited winding-pack current density [A/m²].
    pub j_protection: f64,
}

impl ConductorReport {
    /// Push the scalar results back into the named design-point store.
    pub fn write_back(&self, dp: &mut DesignPoint) -> ScResult<()> {
        dp.set("j_wp_critical", self.j_critical_wp)?;
        dp.set("t_margin", self.t_margin)?;
        dp.set("t_current_sharing", self.t_current_sharing)?;
        dp.set("v_dump", self.v_dump.value)?;
        dp.set("j_protection", self.j_protection)?;
        Ok(())
    }
}

/// Conductor fraction of the cable space, with the central coolant channel
/// folded into the helium fraction. The total helium fraction is capped at
/// 0.99 so the conductor fraction stays positive.
fn conductor_fraction(
    f_helium: f64,
    d_channel: f64,
    a_cable_space: f64,
    sink: &mut dyn DiagnosticSink,
) -> f64 {
    let f_he_total = f_helium + (PI / 4.0) * d_channel * d_channel / a_cable_space;
    if f_he_total > 0.99 {
        sink.report(
            DiagnosticCode::NegativeAreaOrFraction,
            &[("f_he_total", f_he_total), ("f_helium", f_helium)],
        );
        return 1.0 - 0.99;
    }
    1.0 - f_he_total
}

pub fn evaluate_conductor(
    inputs: &ConductorInputs,
    config: &SecantConfig,
    sink: &mut dyn DiagnosticSink,
) -> ConductorResult<ConductorReport> {
    let acs = ensure_positive(inputs.a_cable_space.value, "cable space area")?;
    let a_turn = ensure_positive(inputs.a_turn.value, "turn area")?;
    let b_peak = ensure_positive(inputs.b_peak.value, "peak field")?;
    let i_op = ensure_positive(inputs.i_op.value, "operating current")?;
    let j_wp = ensure_positive(inputs.j_winding_pack, "winding-pack current density")?;
    let t_helium = ensure_positive(inputs.t_helium.value, "helium temperature")?;
    let f_cu = inputs.f_copper;
    let f_he = inputs.f_helium;
    if !(0.0..1.0).contains(&f_cu) {
        return Err(ConductorError::Geometry {
            what: "copper fraction outside [0, 1)",
            value: f_cu,
            code: sc_core::diagnostics::codes::GEOMETRY,
        });
    }
    if !(0.0..1.0).contains(&f_he) {
        return Err(ConductorError::Geometry {
            what: "helium fraction outside [0, 1)",
            value: f_he,
            code: sc_core::diagnostics::codes::GEOMETRY,
        });
    }

    let f_cond = conductor_fraction(f_he, inputs.d_coolant_channel.value, acs, sink);

    let (j_critical_sc, j_critical_strand, t_current_sharing, j_strand_op);
    match &inputs.material {
        Material::RebcoCroco => {
            return Err(MaterialError::UnsupportedPath {
                material: "REBCO CroCo",
                path: "generic conductor",
            }
            .into());
        }
        Material::Bi2212 => {
            let f_hts = inputs.f_hts;
            if !(f_hts > 0.0 && f_hts <= 1.0) {
                return Err(ConductorError::Geometry {
                    what: "strand derating factor outside (0, 1]",
                    value: f_hts,
                    code: sc_core::diagnostics::codes::GEOMETRY,
                });
            }
            j_strand_op = j_wp * a_turn / (acs * f_cond);
            j_critical_strand = bi2212::critical_current_density(t_helium, b_peak, f_hts)?;
            j_critical_sc = j_critical_strand / (1.0 - f_cu);
            let margin = bi2212::temperature_margin(j_strand_op, b_peak, f_hts, t_helium)?;
            t_current_sharing = t_helium + margin;
        }
        material => {
            let strain = material.clamp_strain(inputs.strain, sink);
            if matches!(*material, Material::GlRebco) && b_peak >= GL_REBCO_VALIDATED_FIELD {
                sink.report(
                    DiagnosticCode::RebcoFieldExtrapolation,
                    &[("b_peak", b_peak)],
                );
            }
            let surface = material.critical_surface(t_helium, b_peak, strain)?;
            j_critical_sc = surface.j_crit;
            j_critical_strand = j_critical_sc * (1.0 - f_cu);
            j_strand_op = i_op / (acs * f_cond);

            let j_sc_op = j_strand_op / (1.0 - f_cu);
            let margin =
                material_temperature_margin(material, j_sc_op, b_peak, strain, t_helium, config)?;
            t_current_sharing = margin.t_current_sharing;
        }
    }

    let i_critical = j_critical_strand * f_cond * acs;
    let j_critical_wp = i_critical / a_turn;
    let i_op_fraction = i_op / i_critical;
    let t_margin = t_current_sharing - t_helium;

    if i_op_fraction <= 0.0 {
        sink.report(
            DiagnosticCode::NegativeCurrentRatio,
            &[("i_op_fraction", i_op_fraction), ("i_critical", i_critical)],
        );
    }
    if t_margin <= 0.0 {
        sink.report(
            DiagnosticCode::NegativeTemperatureMargin,
            &[("t_margin", t_margin)],
        );
    }

    let protection = protect(&ProtectionInputs {
        i_op: inputs.i_op,
        e_coil: inputs.e_coil,
        a_cable_space: inputs.a_cable_space,
        a_turn: inputs.a_turn,
        t_dump: inputs.t_dump,
        t_helium: inputs.t_helium,
        t_max: inputs.t_max_quench,
        f_cond,
        f_copper: f_cu,
    })?;

    tracing::debug!(
        material = inputs.material.name(),
        j_critical_wp,
        t_margin,
        i_op_fraction,
        "conductor evaluation"
    );

    Ok(ConductorReport {
        f_cond,
        j_critical_sc,
        j_critical_strand,
        j_critical_wp,
        i_critical,
        i_op_fraction,
        j_strand_op,
        t_margin,
        t_current_sharing,
        v_dump: protection.v_dump,
        j_protection: protection.j_protection,
    })
}
