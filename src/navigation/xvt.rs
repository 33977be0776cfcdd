use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::SvHealth;

/// Satellite state at a given instant, resolved from a navigation record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xvt {
    /// ECEF position (m)
    pub position: Vector3<f64>,
    /// ECEF velocity (m/s)
    pub velocity: Vector3<f64>,
    /// Clock bias (s)
    pub clock_bias: f64,
    /// Clock drift (s.s⁻¹)
    pub clock_drift: f64,
    /// Relativistic correction (s)
    pub relativistic_correction: f64,
    /// Health reported by the source record
    pub health: SvHealth,
}

impl Xvt {
    /// Clock correction (s) including the relativistic effect
    pub fn clock_correction(&self) -> f64 {
        self.clock_bias + self.relativistic_correction
    }
    /// Distance from Earth center (m)
    pub fn radius(&self) -> f64 {
        self.position.norm()
    }
}
