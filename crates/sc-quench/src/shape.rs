//! D-shaped current-centre-line geometry.
//!
//! Both conducting loops of the quench model (toroidal-field coil set and
//! vacuum vessel) are described by the same five-parameter D-shape: a
//! straight inboard leg and three tangent arcs, with the first arc leaving
//! the top of the straight leg at `theta1`.

use crate::error::{QuenchError, QuenchResult};
use sc_core::units::Length;
use sc_core::ensure_positive;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CclGeometry {
    /// Full height of the centre line.
    pub height: Length,
    /// Inboard leg radius.
    pub r_inboard: Length,
    /// Outboard extent radius.
    pub r_outboard: Length,
    /// Radius of the vertically-widest point.
    pub r_peak: Length,
    /// Angle of the first arc, degrees, in (0, 90).
    pub theta1_deg: f64,
}

/// Dimensionless shape descriptors derived from a [`CclGeometry`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeDescriptors {
    /// Half-width of the D.
    pub half_width: f64,
    /// Mean radius.
    pub r_mean: f64,
    /// Triangularity `(r_mean - r_peak)/half_width`.
    pub triangularity: f64,
    /// Elongation `height/half_width`.
    pub elongation: f64,
    /// Aspect ratio `r_mean/half_width`.
    pub aspect: f64,
}

impl CclGeometry {
    /// Validate the shape and expose its scalar extents.
    pub fn validated(&self) -> QuenchResult<(f64, f64, f64, f64)> {
        let h = ensure_positive(self.height.value, "centre-line height")?;
        let ri = ensure_positive(self.r_inboard.value, "inboard radius")?;
        let ro = ensure_positive(self.r_outboard.value, "outboard radius")?;
        let rm = ensure_positive(self.r_peak.value, "peak radius")?;
        if ro <= ri {
            return Err(QuenchError::Geometry {
                what: "outboard radius not beyond inboard radius",
                value: ro,
            });
        }
        if rm < ri || rm > ro {
            return Err(QuenchError::Geometry {
                what: "peak radius outside the radial span",
                value: rm,
            });
        }
        if !(0.0..90.0).contains(&self.theta1_deg) || self.theta1_deg == 0.0 {
            return Err(QuenchError::Geometry {
                what: "first arc angle outside (0, 90) degrees",
                value: self.theta1_deg,
            });
        }
        Ok((h, ri, ro, rm))
    }

    pub fn descriptors(&self) -> QuenchResult<ShapeDescriptors> {
        let (h, ri, ro, rm) = self.validated()?;
        let half_width = (ro - ri) / 2.0;
        let r_mean = (ro + ri) / 2.0;
        Ok(ShapeDescriptors {
            half_width,
            r_mean,
            triangularity: (r_mean - rm) / half_width,
            elongation: h / half_width,
            aspect: r_mean / half_width,
        })
    }
}
