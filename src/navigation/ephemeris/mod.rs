mod kepler;

pub(crate) use kepler::Helper;
pub use kepler::{Kepler, Perturbations};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    navigation::Xvt,
    prelude::{Epoch, SvHealth, SV},
};

/// Onboard clock polynomial
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SvClock {
    /// Time of clock
    pub toc: Epoch,
    /// Clock bias (s)
    pub bias: f64,
    /// Clock drift (s.s⁻¹)
    pub drift: f64,
    /// Clock drift rate (s.s⁻²)
    pub drift_rate: f64,
}

impl SvClock {
    pub fn new(toc: Epoch, bias: f64, drift: f64, drift_rate: f64) -> Self {
        Self {
            toc,
            bias,
            drift,
            drift_rate,
        }
    }
    /// Returns (bias [s], drift [s/s]) of the free running clock at `t`
    pub fn at(&self, t: Epoch) -> (f64, f64) {
        let dt = (t - self.toc).to_seconds();
        (
            self.bias + self.drift * dt + self.drift_rate * dt.powi(2),
            self.drift + 2.0 * self.drift_rate * dt,
        )
    }
}

/// Broadcast Ephemeris
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ephemeris {
    /// Issue of Data (Ephemeris)
    pub iode: u16,
    /// Onboard clock
    pub clock: SvClock,
    /// Time of Ephemeris
    pub toe: Epoch,
    /// Keplerian elements at ToE
    pub kepler: Kepler,
    /// Orbit perturbations
    pub perturbations: Perturbations,
}

impl Ephemeris {
    /// Resolves [Xvt] for given [SV] at `t`.
    /// Returns None if the Keplerian solver did not converge.
    pub fn xvt(&self, sv: SV, t: Epoch, health: SvHealth) -> Option<Xvt> {
        let helper = Helper::solve(sv, &self.kepler, &self.perturbations, self.toe, t)?;
        let (clock_bias, clock_drift) = self.clock.at(t);
        Some(Xvt {
            position: helper.position,
            velocity: helper.velocity,
            clock_bias,
            clock_drift,
            relativistic_correction: helper.dtr,
            health,
        })
    }
}
