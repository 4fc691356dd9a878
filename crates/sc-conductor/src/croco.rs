//! CroCo (cross-conductor) REBCO cable path.
//!
//! The conductor is a square jacket holding a circular cable space three
//! strand diameters across: six CroCo strands around a central copper bar,
//! the rest helium. Each strand is a copper tube with a stack of REBCO
//! tapes soldered inside. Geometry, critical current, temperature margin
//! and the dump voltage all live on this path; the generic orchestrator
//! rejects the material.

use crate::error::{ConductorError, ConductorResult};
use sc_core::diagnostics::codes;
use sc_core::units::{Area, Current, Energy, FluxDensity, Length, Temperature, Time, Voltage, volt};
use sc_core::{DiagnosticCode, DiagnosticSink, ensure_positive};
use sc_materials::rebco::{self, RebcoTape};
use sc_solver::{SecantConfig, current_sharing_temperature};
use std::f64::consts::PI;

/// Strand outer diameter of the reference CroCo design [m]; tape width is
/// scaled in proportion to the actual strand diameter.
const REFERENCE_STRAND_OD: f64 = 5.4e-3;

/// Discharge waveform assumed for the dump-voltage estimate. Both shapes
/// peak at the same initial voltage `2 E / (τ I)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuenchModel {
    Linear,
    Exponential,
}

/// Area breakdown of one CroCo strand [m²].
#[derive(Debug, Clone, Copy)]
pub struct CrocoStrand {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    /// Width of the (scaled) tapes in the stack.
    pub tape_width: f64,
    /// Tapes in the stack; fractional, the stack is sized by thickness.
    pub tape_count: f64,
    pub a_copper_tube: f64,
    pub a_copper_tape: f64,
    pub a_hastelloy: f64,
    pub a_solder: f64,
    pub a_rebco: f64,
    pub area: f64,
}

/// Area breakdown of the full conductor [m²].
#[derive(Debug, Clone, Copy)]
pub struct CrocoCable {
    pub strand: CrocoStrand,
    pub a_cable_space: f64,
    pub a_helium: f64,
    pub a_copper_bar: f64,
    pub a_jacket: f64,
    pub a_conductor: f64,
    /// All copper: six tubes, six tape stacks, one bar.
    pub a_copper_total: f64,
    /// REBCO over all six strands.
    pub a_rebco_total: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct CrocoInputs {
    /// Conductor side length (square, jacket included).
    pub t_conductor: Length,
    /// Steel jacket thickness.
    pub t_jacket: Length,
    /// Copper tube wall thickness.
    pub tube_wall: Length,
    pub tape: RebcoTape,
    pub b_peak: FluxDensity,
    pub t_helium: Temperature,
    pub i_op: Current,
    pub a_turn: Area,
    /// Stored magnetic energy of the whole coil set.
    pub e_total: Energy,
    pub n_coils: f64,
    pub t_dump: Time,
    pub quench_model: QuenchModel,
}

#[derive(Debug, Clone, Copy)]
pub struct CrocoReport {
    pub cable: CrocoCable,
    /// Critical current density of the REBCO layer [A/m²].
    pub j_critical_rebco: f64,
    pub i_critical: f64,
    pub i_op_fraction: f64,
    /// Operating current density in the copper on quench [A/m²].
    pub j_copper: f64,
    /// Critical winding-pack current density [A/m²].
    pub j_critical_wp: f64,
    pub t_margin: f64,
    pub t_current_sharing: f64,
    pub v_dump: Voltage,
}

/// Build the strand and cable area breakdown from the conductor envelope.
pub fn croco_cable(
    t_conductor: f64,
    t_jacket: f64,
    tube_wall: f64,
    tape: &RebcoTape,
    sink: &mut dyn DiagnosticSink,
) -> ConductorResult<CrocoCable> {
    let w = ensure_positive(t_conductor, "conductor width")?;
    ensure_positive(t_jacket, "jacket thickness")?;
    ensure_positive(tube_wall, "tube wall thickness")?;

    let od = w / 3.0 - t_jacket * 2.0 / 3.0;
    if od <= 0.0 {
        return Err(ConductorError::Geometry {
            what: "strand diameter consumed by the jacket",
            value: od,
            code: codes::TURN_DIMENSIONS,
        });
    }
    let id = od - 2.0 * tube_wall;
    if id <= 0.0 {
        return Err(ConductorError::Geometry {
            what: "tube bore consumed by the tube wall",
            value: id,
            code: codes::TURN_DIMENSIONS,
        });
    }

    let tape_width = tape.tape_width * od / REFERENCE_STRAND_OD;
    if tape_width >= id {
        return Err(ConductorError::Geometry {
            what: "tape wider than the tube bore",
            value: tape_width,
            code: codes::TURN_DIMENSIONS,
        });
    }

    let stack_thickness = (id * id - tape_width * tape_width).sqrt();
    let tape_count = stack_thickness / tape.thickness();

    let a_copper_tube = PI * tube_wall * (od - tube_wall);
    let a_rebco = tape.rebco_thickness * tape_width * tape_count;
    let a_copper_tape = tape.copper_thickness * tape_width * tape_count;
    let a_hastelloy = tape.hastelloy_thickness * tape_width * tape_count;
    let a_solder = PI / 4.0 * id * id - stack_thickness * tape_width;
    let area = PI / 4.0 * od * od;

    let strand_sum = a_copper_tube + a_rebco + a_copper_tape + a_hastelloy + a_solder;
    if (strand_sum - area).abs() > 1e-6 * area {
        sink.report(
            DiagnosticCode::StrandAreaAudit,
            &[("sum", strand_sum), ("area", area)],
        );
    }

    let a_cable_space = 9.0 * PI / 4.0 * od * od;
    let a_copper_bar = PI / 4.0 * od * od;
    let a_helium = a_cable_space - 6.0 * area - a_copper_bar;
    let a_conductor = w * w;
    let a_jacket = a_conductor - a_cable_space;
    if a_jacket <= 0.0 {
        return Err(ConductorError::Geometry {
            what: "jacket area non-positive",
            value: a_jacket,
            code: codes::CABLE_SPACE,
        });
    }

    let conductor_sum = a_helium + 6.0 * area + a_copper_bar + a_jacket;
    if (conductor_sum - a_conductor).abs() > 1e-8 * a_conductor {
        sink.report(
            DiagnosticCode::ConductorAreaAudit,
            &[("sum", conductor_sum), ("area", a_conductor)],
        );
    }

    Ok(CrocoCable {
        strand: CrocoStrand {
            outer_diameter: od,
            inner_diameter: id,
            tape_width,
            tape_count,
            a_copper_tube,
            a_copper_tape,
            a_hastelloy,
            a_solder,
            a_rebco,
            area,
        },
        a_cable_space,
        a_helium,
        a_copper_bar,
        a_jacket,
        a_conductor,
        a_copper_total: 6.0 * (a_copper_tube + a_copper_tape) + a_copper_bar,
        a_rebco_total: 6.0 * a_rebco,
    })
}

/// Peak voltage across one coil for a resistor dump of its share of the
/// stored energy.
pub fn croco_dump_voltage(
    model: QuenchModel,
    e_total: f64,
    n_coils: f64,
    t_dump: f64,
    i_op: f64,
) -> f64 {
    match model {
        QuenchModel::Linear | QuenchModel::Exponential => {
            2.0 * (e_total / n_coils) / (t_dump * i_op)
        }
    }
}

pub fn evaluate_croco(
    inputs: &CrocoInputs,
    config: &SecantConfig,
    sink: &mut dyn DiagnosticSink,
) -> ConductorResult<CrocoReport> {
    let b_peak = ensure_positive(inputs.b_peak.value, "peak field")?;
    let t_helium = ensure_positive(inputs.t_helium.value, "helium temperature")?;
    let i_op = ensure_positive(inputs.i_op.value, "operating current")?;
    let a_turn = ensure_positive(inputs.a_turn.value, "turn area")?;
    let e_total = ensure_positive(inputs.e_total.value, "stored energy")?;
    let n_coils = ensure_positive(inputs.n_coils, "coil count")?;
    let t_dump = ensure_positive(inputs.t_dump.value, "dump time")?;

    let cable = croco_cable(
        inputs.t_conductor.value,
        inputs.t_jacket.value,
        inputs.tube_wall.value,
        &inputs.tape,
        sink,
    )?;

    let surface = rebco::croco_critical_current_density(t_helium, b_peak)?;
    let i_critical = surface.j_crit * cable.a_rebco_total;
    let i_op_fraction = i_op / i_critical;
    if i_op_fraction <= 0.0 {
        sink.report(
            DiagnosticCode::NegativeCurrentRatio,
            &[("i_op_fraction", i_op_fraction), ("i_critical", i_critical)],
        );
    }

    let j_op_rebco = i_op / cable.a_rebco_total;
    let margin = current_sharing_temperature(
        j_op_rebco,
        t_helium,
        |t| Ok(rebco::croco_critical_current_density(t, b_peak)?.j_crit),
        config,
    )?;
    if margin.temp_margin <= 0.0 {
        sink.report(
            DiagnosticCode::NegativeTemperatureMargin,
            &[("t_margin", margin.temp_margin)],
        );
    }

    let v_dump = croco_dump_voltage(inputs.quench_model, e_total, n_coils, t_dump, i_op);

    tracing::debug!(
        i_critical,
        i_op_fraction,
        t_margin = margin.temp_margin,
        v_dump,
        "croco evaluation"
    );

    Ok(CrocoReport {
        cable,
        j_critical_rebco: surface.j_crit,
        i_critical,
        i_op_fraction,
        j_copper: i_op / cable.a_copper_total,
        j_critical_wp: i_critical / a_turn,
        t_margin: margin.temp_margin,
        t_current_sharing: margin.t_current_sharing,
        v_dump: volt(v_dump),
    })
}
