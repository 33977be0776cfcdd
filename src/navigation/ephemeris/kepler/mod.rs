#[cfg(feature = "log")]
use log::error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Vector3;

use crate::{
    constants::{EarthModel, EccentricAnomaly},
    prelude::{Epoch, TimeScale, SV},
};

/// [Kepler] stores all keplerian parameters
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Kepler {
    /// semi major axis (m)
    pub a: f64,
    /// Eccentricity (n.a)
    pub e: f64,
    /// Inclination angle at reference time (rad)
    pub i_0: f64,
    /// Longitude of ascending node at weekly epoch (rad)
    pub omega_0: f64,
    /// Mean anomaly at reference time (rad)
    pub m_0: f64,
    /// argument of perigee (rad)
    pub omega: f64,
}

impl Kepler {
    /// Builds [Kepler] from the square root of the semi major axis,
    /// as broadcast.
    pub fn from_sqrt_a(sqrt_a: f64, e: f64, i_0: f64, omega_0: f64, m_0: f64, omega: f64) -> Self {
        Self {
            a: sqrt_a.powi(2),
            e,
            i_0,
            omega_0,
            m_0,
            omega,
        }
    }
}

/// Orbit [Perturbations]
#[derive(Default, Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perturbations {
    /// Mean motion difference from computed value [rad.s-1]
    pub dn: f64,
    /// Inclination rate of change [rad.s-1]
    pub i_dot: f64,
    /// Right ascension rate of change [rad.s^-1]
    pub omega_dot: f64,
    /// Amplitude of sine harmonic correction term of the argument
    /// of latitude [rad]
    pub cus: f64,
    /// Amplitude of cosine harmonic correction term of the argument
    /// of latitude [rad]
    pub cuc: f64,
    /// Amplitude of sine harmonic correction term of the angle of inclination [rad]
    pub cis: f64,
    /// Amplitude of cosine harmonic correction term of the angle of inclination [rad]
    pub cic: f64,
    /// Amplitude of sine harmonic correction term of the orbit radius [m]
    pub crs: f64,
    /// Amplitude of cosine harmonic correction term of the orbit radius [m]
    pub crc: f64,
}

/// [Helper] gathers the orbital state solved from Keplerian elements
#[derive(Debug, Clone, Copy)]
pub(crate) struct Helper {
    /// Time elapsed since reference time (s)
    pub t_k: f64,
    /// Eccentric anomaly (rad)
    pub e_k: f64,
    /// ECEF position (m)
    pub position: Vector3<f64>,
    /// ECEF velocity (m/s)
    pub velocity: Vector3<f64>,
    /// Relativistic Effect Correction (s)
    pub dtr: f64,
}

/// Seconds of week of `t`, in the [SV] timescale
fn seconds_of_week(sv: SV, t: Epoch) -> f64 {
    let ts = sv.constellation.timescale().unwrap_or(TimeScale::GPST);
    let (_, nanos) = t.to_time_scale(ts).to_time_of_week();
    nanos as f64 * 1.0E-9
}

impl Helper {
    /// Solves the Keplerian problem for [SV] at `t`,
    /// `toe` being the reference time of the elements.
    /// Returns None if the eccentric anomaly did not converge.
    pub fn solve(
        sv: SV,
        kepler: &Kepler,
        perturbations: &Perturbations,
        toe: Epoch,
        t: Epoch,
    ) -> Option<Self> {
        let model = EarthModel::of(sv);
        let gm_m3_s2 = model.gm;
        let omega = model.omega;
        let dtr_f = model.dtr_f();

        let t_k = (t - toe).to_seconds();

        let n0 = (gm_m3_s2 / kepler.a.powi(3)).sqrt(); // average angular velocity
        let n = n0 + perturbations.dn; // corrected mean angular velocity
        let m_k = kepler.m_0 + n * t_k; // average anomaly

        // Iterative calculation of e_k
        let mut e_k = m_k;
        let mut converged = false;
        for _ in 0..EccentricAnomaly::MAX_ITER {
            let e_k_next = m_k + kepler.e * e_k.sin();
            let delta = (e_k_next - e_k).abs();
            e_k = e_k_next;
            if delta < EccentricAnomaly::TOLERANCE {
                converged = true;
                break;
            }
        }

        if !converged {
            #[cfg(feature = "log")]
            error!("{} kepler iteration overflow", sv);
            return None;
        }

        // true anomaly
        let (sin_e_k, cos_e_k) = e_k.sin_cos();
        let v_k = ((1.0 - kepler.e.powi(2)).sqrt() * sin_e_k).atan2(cos_e_k - kepler.e);

        let phi_k = v_k + kepler.omega; // latitude argument
        let (x2_sin_phi_k, x2_cos_phi_k) = (2.0 * phi_k).sin_cos();

        // latitude argument correction
        let du_k = perturbations.cus * x2_sin_phi_k + perturbations.cuc * x2_cos_phi_k;
        let u_k = phi_k + du_k;

        // orbital radius correction
        let dr_k = perturbations.crs * x2_sin_phi_k + perturbations.crc * x2_cos_phi_k;
        let r_k = kepler.a * (1.0 - kepler.e * cos_e_k) + dr_k;

        // inclination angle correction
        let di_k = perturbations.cis * x2_sin_phi_k + perturbations.cic * x2_cos_phi_k;
        let i_k = kepler.i_0 + di_k + perturbations.i_dot * t_k;

        // corrected longitude of ascending node
        let toe_sow = seconds_of_week(sv, toe);
        let omega_k = kepler.omega_0 + (perturbations.omega_dot - omega) * t_k - omega * toe_sow;

        // first derivatives
        let fd_e_k = n / (1.0 - kepler.e * cos_e_k);
        let fd_phi_k = (1.0 - kepler.e.powi(2)).sqrt() * fd_e_k / (1.0 - kepler.e * cos_e_k);
        let fd_u_k = fd_phi_k
            * (1.0 + 2.0 * (perturbations.cus * x2_cos_phi_k - perturbations.cuc * x2_sin_phi_k));
        let fd_r_k = kepler.a * kepler.e * sin_e_k * fd_e_k
            + 2.0 * fd_phi_k * (perturbations.crs * x2_cos_phi_k - perturbations.crc * x2_sin_phi_k);
        let fd_i_k = perturbations.i_dot
            + 2.0 * fd_phi_k * (perturbations.cis * x2_cos_phi_k - perturbations.cic * x2_sin_phi_k);
        let fd_omega_k = perturbations.omega_dot - omega;

        // position in orbital plane
        let (sin_u_k, cos_u_k) = u_k.sin_cos();
        let (x, y) = (r_k * cos_u_k, r_k * sin_u_k);
        let fd_x = fd_r_k * cos_u_k - r_k * fd_u_k * sin_u_k;
        let fd_y = fd_r_k * sin_u_k + r_k * fd_u_k * cos_u_k;

        // rotation to ECEF
        let (sin_omega_k, cos_omega_k) = omega_k.sin_cos();
        let (sin_i_k, cos_i_k) = i_k.sin_cos();

        let position = Vector3::new(
            x * cos_omega_k - y * cos_i_k * sin_omega_k,
            x * sin_omega_k + y * cos_i_k * cos_omega_k,
            y * sin_i_k,
        );

        let velocity = Vector3::new(
            fd_x * cos_omega_k - fd_y * cos_i_k * sin_omega_k
                + y * sin_i_k * sin_omega_k * fd_i_k
                - position[1] * fd_omega_k,
            fd_x * sin_omega_k + fd_y * cos_i_k * cos_omega_k
                - y * sin_i_k * cos_omega_k * fd_i_k
                + position[0] * fd_omega_k,
            fd_y * sin_i_k + y * cos_i_k * fd_i_k,
        );

        // relativistic effect correction
        let dtr = dtr_f * kepler.e * kepler.a.sqrt() * sin_e_k;

        Some(Self {
            t_k,
            e_k,
            position,
            velocity,
            dtr,
        })
    }
}
