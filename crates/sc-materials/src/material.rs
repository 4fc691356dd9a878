//! Material selector and critical-surface dispatch.

use crate::error::{MaterialError, MaterialResult};
use crate::nb3sn::{self, JcPoint};
use crate::rebco::{self, RebcoTape};
use crate::{bi2212, nbti};
use sc_core::{DiagnosticCode, DiagnosticSink};

/// Superconductor variants selectable on a design point.
///
/// Ids match the historical selector values carried by upstream design
/// databases, so they are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// ITER Nb3Sn with standard production parameters (id 1).
    IterNb3Sn,
    /// Bi-2212 round strand (id 2). Evaluated inline by the conductor
    /// orchestrator, never through [`Material::critical_surface`].
    Bi2212,
    /// NbTi, linear fit (id 3).
    NbTi,
    /// ITER Nb3Sn with user-supplied reference field and temperature (id 4).
    IterNb3SnUser { bc20m: f64, tc0m: f64 },
    /// WST Nb3Sn strand (id 5).
    WstNb3Sn,
    /// REBCO CroCo cable (id 6). Only valid on the dedicated CroCo path.
    RebcoCroco,
    /// Durham Ginzburg-Landau NbTi (id 7).
    GlNbTi,
    /// Durham Ginzburg-Landau REBCO (id 8).
    GlRebco,
    /// Hazelton-Zhai high-current-density REBCO tape (id 9).
    HazeltonZhaiRebco { tape: RebcoTape },
}

impl Material {
    /// Build a material from its selector id, with default parameters for
    /// the variants that carry any.
    pub fn from_id(id: u8) -> MaterialResult<Self> {
        Ok(match id {
            1 => Material::IterNb3Sn,
            2 => Material::Bi2212,
            3 => Material::NbTi,
            4 => Material::IterNb3SnUser {
                bc20m: nb3sn::BC20M,
                tc0m: nb3sn::TC0M,
            },
            5 => Material::WstNb3Sn,
            6 => Material::RebcoCroco,
            7 => Material::GlNbTi,
            8 => Material::GlRebco,
            9 => Material::HazeltonZhaiRebco {
                tape: RebcoTape::default(),
            },
            _ => return Err(MaterialError::Unknown { id }),
        })
    }

    pub fn id(&self) -> u8 {
        match self {
            Material::IterNb3Sn => 1,
            Material::Bi2212 => 2,
            Material::NbTi => 3,
            Material::IterNb3SnUser { .. } => 4,
            Material::WstNb3Sn => 5,
            Material::RebcoCroco => 6,
            Material::GlNbTi => 7,
            Material::GlRebco => 8,
            Material::HazeltonZhaiRebco { .. } => 9,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Material::IterNb3Sn => "ITER Nb3Sn",
            Material::Bi2212 => "Bi-2212",
            Material::NbTi => "NbTi",
            Material::IterNb3SnUser { .. } => "ITER Nb3Sn (user parameters)",
            Material::WstNb3Sn => "WST Nb3Sn",
            Material::RebcoCroco => "REBCO CroCo",
            Material::GlNbTi => "Durham GL NbTi",
            Material::GlRebco => "Durham GL REBCO",
            Material::HazeltonZhaiRebco { .. } => "Hazelton-Zhai REBCO",
        }
    }

    /// Maximum |strain| the fit is validated for, if the fit uses strain.
    pub fn strain_limit(&self) -> Option<f64> {
        match self {
            Material::IterNb3Sn
            | Material::IterNb3SnUser { .. }
            | Material::WstNb3Sn
            | Material::NbTi
            | Material::GlNbTi => Some(0.5e-2),
            Material::GlRebco | Material::HazeltonZhaiRebco { .. } => Some(0.7e-2),
            Material::Bi2212 | Material::RebcoCroco => None,
        }
    }

    /// Clamp strain into the fit's validated range, reporting a diagnostic
    /// when clamping actually changed the value.
    pub fn clamp_strain(&self, strain: f64, sink: &mut dyn DiagnosticSink) -> f64 {
        match self.strain_limit() {
            Some(limit) if strain.abs() > limit => {
                let clamped = strain.clamp(-limit, limit);
                sink.report(
                    DiagnosticCode::StrainLimitExceeded,
                    &[
                        ("material_id", self.id() as f64),
                        ("strain", strain),
                        ("limit", limit),
                    ],
                );
                clamped
            }
            _ => strain,
        }
    }

    /// Evaluate the critical surface at the given operating point.
    ///
    /// Bi-2212 and CroCo are handled by dedicated paths in the conductor
    /// crate and are rejected here.
    pub fn critical_surface(
        &self,
        temperature: f64,
        field: f64,
        strain: f64,
    ) -> MaterialResult<JcPoint> {
        match self {
            Material::IterNb3Sn => nb3sn::critical_current_density(
                temperature,
                field,
                strain,
                nb3sn::BC20M,
                nb3sn::TC0M,
                &nb3sn::ITER_2008,
            ),
            Material::IterNb3SnUser { bc20m, tc0m } => nb3sn::critical_current_density(
                temperature,
                field,
                strain,
                *bc20m,
                *tc0m,
                &nb3sn::ITER_2008,
            ),
            Material::WstNb3Sn => nb3sn::critical_current_density(
                temperature,
                field,
                strain,
                nb3sn::BC20M,
                nb3sn::TC0M,
                &nb3sn::WST,
            ),
            Material::NbTi => nbti::critical_current_density(temperature, field),
            Material::GlNbTi => nbti::gl_critical_current_density(temperature, field, strain),
            Material::GlRebco => rebco::gl_critical_current_density(temperature, field, strain),
            Material::HazeltonZhaiRebco { tape } => {
                rebco::hijc_critical_current_density(temperature, field, tape)
            }
            Material::Bi2212 => Err(MaterialError::UnsupportedPath {
                material: "Bi-2212",
                path: "generic critical-surface",
            }),
            Material::RebcoCroco => Err(MaterialError::UnsupportedPath {
                material: "REBCO CroCo",
                path: "generic critical-surface",
            }),
        }
    }

    /// Strand-level Bi-2212 evaluation; see [`bi2212`].
    pub fn bi2212_strand_jc(temperature: f64, field: f64, f_hts: f64) -> MaterialResult<f64> {
        bi2212::critical_current_density(temperature, field, f_hts)
    }
}
