//! Diagnostic reporting channel.
//!
//! Soft failures (strain clamp, negative margin, area audits) are reported
//! through a [`DiagnosticSink`] as a numeric code plus named values and never
//! halt an evaluation. Hard failures use [`crate::ScError`] instead, carrying
//! a code from [`codes`].

/// Numeric codes for hard failures, embedded in [`crate::ScError`].
///
/// Codes below 300 match the original error registry of the reference design
/// tool; the 3xx block covers conditions that were previously only logged or
/// silently ignored.
pub mod codes {
    /// Turn dimensions too small for the conduit/insulation build.
    pub const TURN_DIMENSIONS: u16 = 100;
    /// Cable-space area non-positive beyond the zero-rounding-radius fallback.
    pub const CABLE_SPACE: u16 = 101;
    /// Material selector outside the nine known variants.
    pub const UNKNOWN_MATERIAL: u16 = 310;
    /// Root-finder failed to converge within the iteration budget.
    pub const NON_CONVERGENCE: u16 = 311;
    /// Coil-structure decay constant equal to the dump decay constant.
    pub const DECAY_SINGULARITY: u16 = 312;
    /// NaN or infinity in an intermediate or final result.
    pub const NON_FINITE: u16 = 313;
    /// Geometry input rejected (non-positive radius, area, time, current).
    pub const GEOMETRY: u16 = 314;
    /// Material routed down an evaluation path that does not support it.
    pub const MATERIAL_PATH: u16 = 315;
    /// Correlation evaluated outside its mathematical domain.
    pub const CORRELATION_RANGE: u16 = 316;
}

/// Soft-failure diagnostic codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum DiagnosticCode {
    /// Strain magnitude exceeded the material limit and was clamped.
    StrainLimitExceeded = 261,
    /// REBCO correlation evaluated beyond its measured field range.
    RebcoFieldExtrapolation = 266,
    /// A derived area or fraction came out non-positive.
    NegativeAreaOrFraction = 276,
    /// Temperature margin at or below zero.
    NegativeTemperatureMargin = 301,
    /// Operating/critical current ratio at or below zero.
    NegativeCurrentRatio = 302,
    /// CroCo strand areas do not sum to the strand cross-section.
    StrandAreaAudit = 303,
    /// CroCo conductor areas do not sum to the conductor cross-section.
    ConductorAreaAudit = 304,
}

/// Fire-and-forget reporting channel for soft failures.
///
/// Implementations must not block or fail; evaluation continues regardless of
/// what the sink does with the report.
pub trait DiagnosticSink {
    fn report(&mut self, code: DiagnosticCode, context: &[(&'static str, f64)]);
}

/// Default sink: forwards reports to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, code: DiagnosticCode, context: &[(&'static str, f64)]) {
        tracing::warn!(code = code as u16, ?context, "design-point diagnostic");
    }
}

/// Sink that records every report, for the optimizer loop and for tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<DiagnosticEvent>,
}

#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub code: DiagnosticCode,
    pub context: Vec<(&'static str, f64)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: DiagnosticCode) -> bool {
        self.events.iter().any(|e| e.code == code)
    }

    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.events.iter().filter(|e| e.code == code).count()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, code: DiagnosticCode, context: &[(&'static str, f64)]) {
        self.events.push(DiagnosticEvent {
            code,
            context: context.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_counts_by_code() {
        let mut sink = RecordingSink::new();
        sink.report(DiagnosticCode::StrainLimitExceeded, &[("strain", 0.008)]);
        sink.report(DiagnosticCode::StrainLimitExceeded, &[("strain", -0.008)]);
        sink.report(DiagnosticCode::NegativeTemperatureMargin, &[("tmarg", -0.2)]);

        assert_eq!(sink.count(DiagnosticCode::StrainLimitExceeded), 2);
        assert!(sink.contains(DiagnosticCode::NegativeTemperatureMargin));
        assert!(!sink.contains(DiagnosticCode::NegativeCurrentRatio));
    }

    #[test]
    fn codes_match_registry() {
        assert_eq!(DiagnosticCode::StrainLimitExceeded as u16, 261);
        assert_eq!(DiagnosticCode::RebcoFieldExtrapolation as u16, 266);
        assert_eq!(DiagnosticCode::NegativeTemperatureMargin as u16, 301);
    }
}
