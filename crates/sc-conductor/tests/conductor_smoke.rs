//! End-to-end conductor evaluations at machine-scale operating points.

use sc_conductor::{
    ConductorInputs, CrocoInputs, QuenchModel, evaluate_conductor, evaluate_croco,
};
use sc_core::units::{amp, joule, k, m, m2, s, tesla};
use sc_core::{DesignPoint, DiagnosticCode, RecordingSink};
use sc_materials::{Material, RebcoTape, bi2212};
use sc_solver::SecantConfig;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn nb3sn_inputs(i_op: f64) -> ConductorInputs {
    ConductorInputs {
        material: Material::IterNb3Sn,
        a_cable_space: m2(1.0e-3),
        a_turn: m2(1.5e-3),
        b_peak: tesla(11.8),
        f_helium: 0.3,
        f_copper: 0.69,
        f_hts: 1.0,
        d_coolant_channel: m(8.0e-3),
        i_op: amp(i_op),
        j_winding_pack: i_op / 1.5e-3,
        strain: -0.005,
        t_dump: s(30.0),
        e_coil: joule(2.3e9),
        t_helium: k(4.75),
        t_max_quench: k(150.0),
    }
}

#[test]
fn nb3sn_design_point_has_usable_margin() {
    init_tracing();
    let mut sink = RecordingSink::new();
    let report =
        evaluate_conductor(&nb3sn_inputs(20.0e3), &SecantConfig::default(), &mut sink).unwrap();

    assert!(report.i_op_fraction > 0.0 && report.i_op_fraction < 1.0);
    assert!(
        report.t_margin > 0.5 && report.t_margin < 3.5,
        "margin = {}",
        report.t_margin
    );
    assert!(report.j_critical_sc > report.j_critical_strand);
    assert!(report.j_critical_strand > report.j_critical_wp);
    assert!(!sink.contains(DiagnosticCode::NegativeTemperatureMargin));

    // Dump voltage is pure energy balance.
    let expected_vd = 2.0 * 2.3e9 / (30.0 * 20.0e3);
    assert!((report.v_dump.value - expected_vd).abs() < 1e-6 * expected_vd);
    assert!(report.j_protection > 1.0e7);
}

#[test]
fn overloaded_conductor_reports_negative_margin_softly() {
    init_tracing();
    let mut sink = RecordingSink::new();
    let report =
        evaluate_conductor(&nb3sn_inputs(40.0e3), &SecantConfig::default(), &mut sink).unwrap();

    assert!(report.t_margin < 0.0);
    assert!(report.i_op_fraction > 1.0);
    assert!(sink.contains(DiagnosticCode::NegativeTemperatureMargin));
}

#[test]
fn clamped_strain_evaluates_like_the_limit() {
    init_tracing();
    let mut at_limit_sink = RecordingSink::new();
    let at_limit = evaluate_conductor(
        &nb3sn_inputs(20.0e3),
        &SecantConfig::default(),
        &mut at_limit_sink,
    )
    .unwrap();

    let mut clamped_inputs = nb3sn_inputs(20.0e3);
    clamped_inputs.strain = -0.02;
    let mut clamped_sink = RecordingSink::new();
    let clamped = evaluate_conductor(
        &clamped_inputs,
        &SecantConfig::default(),
        &mut clamped_sink,
    )
    .unwrap();

    assert_eq!(clamped.j_critical_wp, at_limit.j_critical_wp);
    assert_eq!(clamped.t_margin, at_limit.t_margin);
    assert!(clamped_sink.contains(DiagnosticCode::StrainLimitExceeded));
    assert!(!at_limit_sink.contains(DiagnosticCode::StrainLimitExceeded));
}

#[test]
fn bi2212_margin_is_consistent_with_the_correlation() {
    init_tracing();
    let mut inputs = nb3sn_inputs(20.0e3);
    inputs.material = Material::Bi2212;
    inputs.f_copper = 0.6;
    inputs.f_hts = 0.5;
    let mut sink = RecordingSink::new();
    let report = evaluate_conductor(&inputs, &SecantConfig::default(), &mut sink).unwrap();

    assert!(report.t_margin > 0.0);
    // Re-evaluating the correlation at the sharing temperature reproduces
    // the operating strand current density.
    let jc_at_cs =
        bi2212::critical_current_density(report.t_current_sharing, 11.8, 0.5).unwrap();
    assert!(
        (jc_at_cs - report.j_strand_op).abs() < 1e-6 * report.j_strand_op,
        "jc = {jc_at_cs}, j_op = {}",
        report.j_strand_op
    );
}

#[test]
fn bi2212_derating_is_independent_of_the_copper_fraction() {
    init_tracing();
    // Same copper fraction, different strand derating: the derating scales
    // the strand critical current density, while 1 - f_cu only backs out
    // the superconductor-level value.
    let mut base = nb3sn_inputs(20.0e3);
    base.material = Material::Bi2212;
    base.f_copper = 0.6;
    base.f_hts = 0.4;
    let mut derated = base;
    derated.f_hts = 0.5;

    let mut sink = RecordingSink::new();
    let a = evaluate_conductor(&base, &SecantConfig::default(), &mut sink).unwrap();
    let b = evaluate_conductor(&derated, &SecantConfig::default(), &mut sink).unwrap();

    let ratio = b.j_critical_strand / a.j_critical_strand;
    assert!((ratio - 0.5 / 0.4).abs() < 1e-9, "ratio = {ratio}");
    assert!(b.t_margin > a.t_margin);
    // Superconductor-level value is strand value over the non-copper share.
    assert!((a.j_critical_sc - a.j_critical_strand / (1.0 - 0.6)).abs()
        < 1e-9 * a.j_critical_sc);
}

#[test]
fn report_writes_back_into_the_design_point() {
    init_tracing();
    let mut sink = RecordingSink::new();
    let report =
        evaluate_conductor(&nb3sn_inputs(20.0e3), &SecantConfig::default(), &mut sink).unwrap();

    let mut dp = DesignPoint::default();
    report.write_back(&mut dp).unwrap();
    assert_eq!(dp.get("j_wp_critical"), Some(report.j_critical_wp));
    assert_eq!(dp.get("t_margin"), Some(report.t_margin));
    assert_eq!(dp.get("v_dump"), Some(report.v_dump.value));
}

#[test]
fn croco_cable_end_to_end() {
    init_tracing();
    let inputs = CrocoInputs {
        t_conductor: m(20.2e-3),
        t_jacket: m(2.0e-3),
        tube_wall: m(0.5e-3),
        tape: RebcoTape::default(),
        b_peak: tesla(11.8),
        t_helium: k(4.75),
        i_op: amp(6.0e3),
        a_turn: m2(4.5e-4),
        e_total: joule(4.0e10),
        n_coils: 16.0,
        t_dump: s(15.0),
        quench_model: QuenchModel::Linear,
    };
    let mut sink = RecordingSink::new();
    let report = evaluate_croco(&inputs, &SecantConfig::default(), &mut sink).unwrap();

    assert!(!sink.contains(DiagnosticCode::StrandAreaAudit));
    assert!(!sink.contains(DiagnosticCode::ConductorAreaAudit));
    assert!(report.i_op_fraction > 0.0 && report.i_op_fraction < 1.0);
    // HTS margin at 4.75 K is tens of kelvin.
    assert!(report.t_margin > 5.0, "margin = {}", report.t_margin);
    // Copper stays under the usual 1e8 A/m² protection ceiling.
    assert!(report.j_copper < 1.0e8, "j_copper = {}", report.j_copper);
    let expected_vd = 2.0 * (4.0e10 / 16.0) / (15.0 * 6.0e3);
    assert!((report.v_dump.value - expected_vd).abs() < 1e-9 * expected_vd);
}
