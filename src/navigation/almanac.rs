#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    navigation::{
        ephemeris::{Helper, Kepler, Perturbations},
        Xvt,
    },
    prelude::{Epoch, SvHealth, SV},
};

/// Almanac: coarse orbit and clock of one satellite,
/// usually broadcast by every satellite of the constellation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Almanac {
    /// Time of applicability
    pub toa: Epoch,
    /// Clock bias (s)
    pub af0: f64,
    /// Clock drift (s.s⁻¹)
    pub af1: f64,
    /// Keplerian elements at ToA
    pub kepler: Kepler,
    /// Right ascension rate of change [rad.s^-1]
    pub omega_dot: f64,
}

impl Almanac {
    /// Resolves [Xvt] for given [SV] at `t`.
    /// Almanacs do not carry harmonic corrections.
    pub fn xvt(&self, sv: SV, t: Epoch, health: SvHealth) -> Option<Xvt> {
        let perturbations = Perturbations {
            omega_dot: self.omega_dot,
            ..Default::default()
        };
        let helper = Helper::solve(sv, &self.kepler, &perturbations, self.toa, t)?;
        let dt = (t - self.toa).to_seconds();
        Some(Xvt {
            position: helper.position,
            velocity: helper.velocity,
            clock_bias: self.af0 + self.af1 * dt,
            clock_drift: self.af1,
            relativistic_correction: helper.dtr,
            health,
        })
    }
}
