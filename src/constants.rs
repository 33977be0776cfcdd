//! Geodetic parameters of the broadcast orbit models

use crate::prelude::{Constellation, SV};

/// Speed of light in vacuum (m.s⁻¹)
const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Earth model a constellation expresses its broadcast orbits in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EarthModel {
    /// Gravitational constant (m³.s⁻²)
    pub gm: f64,
    /// Rotation rate (rad.s⁻¹)
    pub omega: f64,
}

impl EarthModel {
    /// WGS-84, as published in IS-GPS-200
    pub const WGS84: Self = Self {
        gm: 3.986005E14,
        omega: 7.2921151467E-5,
    };
    /// Galileo terrestrial reference frame
    pub const GTRF: Self = Self {
        gm: 3.986004418E14,
        omega: 7.2921151467E-5,
    };
    /// BeiDou CGCS2000
    pub const CGCS2000: Self = Self {
        gm: 3.986004418E14,
        omega: 7.292115E-5,
    };
    /// Glonass PZ-90
    pub const PZ90: Self = Self {
        gm: 3.9860044E14,
        omega: 7.292115E-5,
    };

    /// Model used by this satellite's system. Other systems
    /// (QZSS, SBAS, IRNSS) broadcast in the GPS model.
    pub const fn of(sv: SV) -> Self {
        match sv.constellation {
            Constellation::Galileo => Self::GTRF,
            Constellation::BeiDou => Self::CGCS2000,
            Constellation::Glonass => Self::PZ90,
            _ => Self::WGS84,
        }
    }

    /// Relativistic clock correction factor F (s.m^-½), such that
    /// Δtr = F.e.√A.sin(E)
    pub fn dtr_f(&self) -> f64 {
        -2.0 * self.gm.sqrt() / SPEED_OF_LIGHT_M_S.powi(2)
    }
}

/// Eccentric anomaly resolution
pub(crate) struct EccentricAnomaly;

impl EccentricAnomaly {
    pub const MAX_ITER: u8 = 30;
    /// rad
    pub const TOLERANCE: f64 = 1.0E-12;
}
