//! Satellite + signal identification of navigation messages
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    prelude::{CarrierBand, Constellation, NavSignalId, NavType, ParsingError, TrackingCode, SV},
    wildcard::{Wildcard, ANY_PRN},
};

/// [NavSatelliteId] identifies the source of a navigation message:
/// the subject satellite the data describes, the satellite that
/// transmitted it, and the signal it was demodulated from.
/// Use [ANY_PRN] and [Constellation::Mixed] as wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavSatelliteId {
    /// Signal this message was decoded from
    pub signal: NavSignalId,
    /// Satellite described by this message
    pub sat: SV,
    /// Satellite that transmitted this message
    pub xmit: SV,
}

impl Default for NavSatelliteId {
    /// Builds a [NavSatelliteId] that matches anything
    fn default() -> Self {
        Self::any()
    }
}

impl NavSatelliteId {
    /// Builds a new [NavSatelliteId] from subject and transmitting
    /// satellite numbers, within the same system.
    pub fn new(
        sat: u8,
        xmit: u8,
        system: Constellation,
        carrier: CarrierBand,
        code: TrackingCode,
        nav: NavType,
    ) -> Self {
        Self {
            signal: NavSignalId::new(system, carrier, code, nav),
            sat: SV::new(system, sat),
            xmit: SV::new(system, xmit),
        }
    }
    /// Builds a [NavSatelliteId] for a message the satellite
    /// broadcast about itself.
    pub fn from_sv(sv: SV, carrier: CarrierBand, code: TrackingCode, nav: NavType) -> Self {
        Self {
            signal: NavSignalId::new(sv.constellation, carrier, code, nav),
            sat: sv,
            xmit: sv,
        }
    }
    /// Builds a [NavSatelliteId] that matches any message
    /// describing this satellite, whatever the signal or transmitter.
    pub fn any_signal(sv: SV) -> Self {
        Self {
            signal: NavSignalId::any(),
            sat: sv,
            xmit: SV::new(Constellation::Mixed, ANY_PRN),
        }
    }
    /// Builds a [NavSatelliteId] that matches anything
    pub fn any() -> Self {
        let any = SV::new(Constellation::Mixed, ANY_PRN);
        Self {
            signal: NavSignalId::any(),
            sat: any,
            xmit: any,
        }
    }
    /// Copies and returns [NavSatelliteId] with updated transmitting satellite
    pub fn with_xmit(&self, xmit: SV) -> Self {
        let mut s = *self;
        s.xmit = xmit;
        s
    }
    /// Copies and returns [NavSatelliteId] with updated [NavSignalId]
    pub fn with_signal(&self, signal: NavSignalId) -> Self {
        let mut s = *self;
        s.signal = signal;
        s
    }
}

impl Wildcard for NavSatelliteId {
    fn is_wildcard(&self) -> bool {
        self.signal.is_wildcard() || self.sat.is_wildcard() || self.xmit.is_wildcard()
    }
    fn matches(&self, stored: &Self) -> bool {
        self.signal.matches(&stored.signal)
            && self.sat.matches(&stored.sat)
            && self.xmit.matches(&stored.xmit)
    }
}

impl std::fmt::Display for NavSatelliteId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.sat == self.xmit {
            write!(f, "{:x} ({})", self.sat, self.signal)
        } else {
            write!(f, "{:x} via {:x} ({})", self.sat, self.xmit, self.signal)
        }
    }
}

/// Parses "CNN" satellite descriptions, "M00" being the wildcard
fn parse_sv(s: &str) -> Result<SV, ParsingError> {
    let s = s.trim();
    let (Some(system), Some(prn)) = (s.get(..1), s.get(1..)) else {
        return Err(ParsingError::Satellite(s.to_string()));
    };
    let constellation = Constellation::from_str(system)?;
    let prn = prn
        .parse::<u8>()
        .map_err(|_| ParsingError::Satellite(s.to_string()))?;
    Ok(SV::new(constellation, prn))
}

impl FromStr for NavSatelliteId {
    type Err = ParsingError;
    /// Parses "G01 (G L1 CA GPSLNAV)" descriptions, or
    /// "G01 via G02 (G L1 CA GPSLNAV)" when the message was
    /// transmitted by another satellite.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sats, signal) = s
            .trim()
            .strip_suffix(')')
            .and_then(|s| s.split_once('('))
            .ok_or_else(|| ParsingError::NavSatellite(s.to_string()))?;

        let signal = NavSignalId::from_str(signal)?;

        let (sat, xmit) = match sats.split_once(" via ") {
            Some((sat, xmit)) => (parse_sv(sat)?, parse_sv(xmit)?),
            None => {
                let sat = parse_sv(sats)?;
                (sat, sat)
            },
        };

        Ok(Self { signal, sat, xmit })
    }
}
