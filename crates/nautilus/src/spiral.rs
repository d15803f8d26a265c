//! Outward spiral candidate-point generation.

use crate::geom::{Point, point};
use crate::{Error, Result};
use std::f64::consts::TAU;

/// An infinite, deterministic stream of candidate points.
///
/// Implementations must never terminate and must yield points whose distance
/// from the search center never decreases; the layouter relies on that order
/// for its compactness guarantee. A generator is single-use: restarting the
/// search means constructing a fresh instance.
pub trait PointGenerator {
    fn next_point(&mut self) -> Point;
}

/// Construction parameters for [`ArchimedeanSpiral`].
///
/// Smaller steps try more candidates per unit of ground covered: placements
/// get tighter, each one costs more overlap checks. This is the central
/// quality/performance knob of the whole engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralOptions {
    pub center: Point,
    /// Angle advance per candidate, in radians. Must be finite and > 0.
    pub angle_step: f64,
    /// Radius growth per full turn. Must be finite and > 0.
    pub radius_step: f64,
}

impl Default for SpiralOptions {
    fn default() -> Self {
        Self {
            center: point(0.0, 0.0),
            angle_step: 0.1,
            radius_step: 0.5,
        }
    }
}

impl SpiralOptions {
    pub fn validate(&self) -> Result<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(Error::InvalidSpiralOptions {
                message: format!(
                    "center must be finite, got ({}, {})",
                    self.center.x, self.center.y
                ),
            });
        }
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(Error::InvalidSpiralOptions {
                message: format!("angle_step must be > 0, got {}", self.angle_step),
            });
        }
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            return Err(Error::InvalidSpiralOptions {
                message: format!("radius_step must be > 0, got {}", self.radius_step),
            });
        }
        Ok(())
    }
}

/// Archimedean spiral scan: angle sweeps in fixed increments, radius grows by
/// one step per completed turn.
///
/// The very first candidate is the center itself (radius 0), and the radius is
/// non-decreasing over the whole stream, so earlier candidates are always at
/// least as close to the center as later ones.
#[derive(Debug, Clone)]
pub struct ArchimedeanSpiral {
    center: Point,
    angle_step: f64,
    radius_step: f64,
    angle: f64,
    radius: f64,
}

impl ArchimedeanSpiral {
    pub fn new(options: SpiralOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            center: options.center,
            angle_step: options.angle_step,
            radius_step: options.radius_step,
            angle: 0.0,
            radius: 0.0,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Distance from the center of the candidate the next call will yield.
    pub fn current_radius(&self) -> f64 {
        self.radius
    }
}

impl PointGenerator for ArchimedeanSpiral {
    fn next_point(&mut self) -> Point {
        let p = point(
            self.center.x + self.radius * self.angle.cos(),
            self.center.y + self.radius * self.angle.sin(),
        );
        self.angle += self.angle_step;
        if self.angle >= TAU {
            self.angle -= TAU;
            self.radius += self.radius_step;
        }
        p
    }
}
