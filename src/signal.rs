//! Navigation signal identification
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    prelude::{Constellation, ParsingError},
    wildcard::Wildcard,
};

/// Carrier band on which a navigation message is broadcast.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CarrierBand {
    /// Matches any carrier band
    #[default]
    Any,
    /// L1 (GPS, SBAS, QZSS) and E1 (Galileo)
    L1,
    /// L2 (GPS, QZSS)
    L2,
    /// L5 (GPS, SBAS, QZSS) and E5a (Galileo)
    L5,
    /// L6 (QZSS LEX) and E6 (Galileo)
    L6,
    /// Glonass G1 (FDMA)
    G1,
    /// Glonass G2 (FDMA)
    G2,
    /// Glonass G3
    G3,
    /// Galileo E5b
    E5b,
    /// Galileo E5 (a+b)
    E5ab,
    /// BeiDou B1
    B1,
    /// BeiDou B2
    B2,
    /// BeiDou B3
    B3,
    /// IRNSS S
    S,
}

impl std::fmt::Display for CarrierBand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::L1 => write!(f, "L1"),
            Self::L2 => write!(f, "L2"),
            Self::L5 => write!(f, "L5"),
            Self::L6 => write!(f, "L6"),
            Self::G1 => write!(f, "G1"),
            Self::G2 => write!(f, "G2"),
            Self::G3 => write!(f, "G3"),
            Self::E5b => write!(f, "E5b"),
            Self::E5ab => write!(f, "E5ab"),
            Self::B1 => write!(f, "B1"),
            Self::B2 => write!(f, "B2"),
            Self::B3 => write!(f, "B3"),
            Self::S => write!(f, "S"),
        }
    }
}

impl FromStr for CarrierBand {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANY" => Ok(Self::Any),
            "L1" | "E1" => Ok(Self::L1),
            "L2" => Ok(Self::L2),
            "L5" | "E5A" => Ok(Self::L5),
            "L6" | "E6" => Ok(Self::L6),
            "G1" => Ok(Self::G1),
            "G2" => Ok(Self::G2),
            "G3" => Ok(Self::G3),
            "E5B" => Ok(Self::E5b),
            "E5AB" | "E5" => Ok(Self::E5ab),
            "B1" => Ok(Self::B1),
            "B2" => Ok(Self::B2),
            "B3" => Ok(Self::B3),
            "S" => Ok(Self::S),
            _ => Err(ParsingError::CarrierBand(s.to_string())),
        }
    }
}

impl Wildcard for CarrierBand {
    fn is_wildcard(&self) -> bool {
        *self == Self::Any
    }
}

/// Ranging code tracked to demodulate a navigation message.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TrackingCode {
    /// Matches any tracking code
    #[default]
    Any,
    /// GPS / QZSS civilian C/A code
    CA,
    /// GPS precise code
    P,
    /// GPS encrypted precise code
    Y,
    /// GPS / QZSS L1C data component
    L1CD,
    /// GPS / QZSS L2C medium code
    L2CM,
    /// GPS / QZSS L5 in-phase code
    L5I,
    /// Glonass civilian (standard accuracy) code
    Standard,
    /// Galileo E1 B (data) component
    E1B,
    /// Galileo E5a in-phase component
    E5aI,
    /// Galileo E5b in-phase component
    E5bI,
    /// BeiDou B1 in-phase code
    B1I,
    /// BeiDou B2 in-phase code
    B2I,
    /// BeiDou B3 in-phase code
    B3I,
}

impl std::fmt::Display for TrackingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::CA => write!(f, "CA"),
            Self::P => write!(f, "P"),
            Self::Y => write!(f, "Y"),
            Self::L1CD => write!(f, "L1CD"),
            Self::L2CM => write!(f, "L2CM"),
            Self::L5I => write!(f, "L5I"),
            Self::Standard => write!(f, "Standard"),
            Self::E1B => write!(f, "E1B"),
            Self::E5aI => write!(f, "E5aI"),
            Self::E5bI => write!(f, "E5bI"),
            Self::B1I => write!(f, "B1I"),
            Self::B2I => write!(f, "B2I"),
            Self::B3I => write!(f, "B3I"),
        }
    }
}

impl FromStr for TrackingCode {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANY" => Ok(Self::Any),
            "CA" | "C/A" => Ok(Self::CA),
            "P" => Ok(Self::P),
            "Y" => Ok(Self::Y),
            "L1CD" => Ok(Self::L1CD),
            "L2CM" => Ok(Self::L2CM),
            "L5I" => Ok(Self::L5I),
            "STANDARD" => Ok(Self::Standard),
            "E1B" => Ok(Self::E1B),
            "E5AI" => Ok(Self::E5aI),
            "E5BI" => Ok(Self::E5bI),
            "B1I" => Ok(Self::B1I),
            "B2I" => Ok(Self::B2I),
            "B3I" => Ok(Self::B3I),
            _ => Err(ParsingError::TrackingCode(s.to_string())),
        }
    }
}

impl Wildcard for TrackingCode {
    fn is_wildcard(&self) -> bool {
        *self == Self::Any
    }
}

/// Navigation message format (message system)
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavType {
    /// Matches any message format
    #[default]
    Any,
    /// GPS / QZSS legacy NAV message
    GPSLNAV,
    /// GPS / QZSS civilian NAV message on L2
    GPSCNAVL2,
    /// GPS / QZSS civilian NAV message on L5
    GPSCNAVL5,
    /// GPS / QZSS CNAV-2 message
    GPSCNAV2,
    /// GPS military NAV message
    GPSMNAV,
    /// BeiDou D1 message
    BDSD1,
    /// BeiDou D2 message
    BDSD2,
    /// Glonass FDMA civilian message
    GLOFDMA,
    /// Galileo F/NAV message
    GALFNAV,
    /// Galileo I/NAV message
    GALINAV,
    /// IRNSS SPS message
    IRNSSSPS,
}

impl std::fmt::Display for NavType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::GPSLNAV => write!(f, "GPSLNAV"),
            Self::GPSCNAVL2 => write!(f, "GPSCNAVL2"),
            Self::GPSCNAVL5 => write!(f, "GPSCNAVL5"),
            Self::GPSCNAV2 => write!(f, "GPSCNAV2"),
            Self::GPSMNAV => write!(f, "GPSMNAV"),
            Self::BDSD1 => write!(f, "BDSD1"),
            Self::BDSD2 => write!(f, "BDSD2"),
            Self::GLOFDMA => write!(f, "GLOFDMA"),
            Self::GALFNAV => write!(f, "GALFNAV"),
            Self::GALINAV => write!(f, "GALINAV"),
            Self::IRNSSSPS => write!(f, "IRNSSSPS"),
        }
    }
}

impl FromStr for NavType {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANY" => Ok(Self::Any),
            "GPSLNAV" | "LNAV" => Ok(Self::GPSLNAV),
            "GPSCNAVL2" => Ok(Self::GPSCNAVL2),
            "GPSCNAVL5" | "CNAV" => Ok(Self::GPSCNAVL5),
            "GPSCNAV2" | "CNV2" => Ok(Self::GPSCNAV2),
            "GPSMNAV" => Ok(Self::GPSMNAV),
            "BDSD1" | "D1" => Ok(Self::BDSD1),
            "BDSD2" | "D2" => Ok(Self::BDSD2),
            "GLOFDMA" | "FDMA" => Ok(Self::GLOFDMA),
            "GALFNAV" | "FNAV" => Ok(Self::GALFNAV),
            "GALINAV" | "INAV" => Ok(Self::GALINAV),
            "IRNSSSPS" => Ok(Self::IRNSSSPS),
            _ => Err(ParsingError::NavType(s.to_string())),
        }
    }
}

impl Wildcard for NavType {
    fn is_wildcard(&self) -> bool {
        *self == Self::Any
    }
}

/// [NavSignalId] identifies a class of navigation signal,
/// independently of the satellite broadcasting it.
/// [Constellation::Mixed] acts as the "any system" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavSignalId {
    /// System broadcasting this signal
    pub system: Constellation,
    /// Carrier band
    pub carrier: CarrierBand,
    /// Tracking code
    pub code: TrackingCode,
    /// Message format
    pub nav: NavType,
}

impl Default for NavSignalId {
    /// Builds a signal identity that matches any signal
    fn default() -> Self {
        Self::any()
    }
}

impl NavSignalId {
    /// Builds a new [NavSignalId]
    pub fn new(system: Constellation, carrier: CarrierBand, code: TrackingCode, nav: NavType) -> Self {
        Self {
            system,
            carrier,
            code,
            nav,
        }
    }
    /// Builds a [NavSignalId] that matches any signal
    pub fn any() -> Self {
        Self::new(
            Constellation::Mixed,
            CarrierBand::Any,
            TrackingCode::Any,
            NavType::Any,
        )
    }
    /// Copies and returns [NavSignalId] with updated [CarrierBand]
    pub fn with_carrier(&self, carrier: CarrierBand) -> Self {
        let mut s = *self;
        s.carrier = carrier;
        s
    }
    /// Copies and returns [NavSignalId] with updated [TrackingCode]
    pub fn with_code(&self, code: TrackingCode) -> Self {
        let mut s = *self;
        s.code = code;
        s
    }
    /// Copies and returns [NavSignalId] with updated [NavType]
    pub fn with_nav(&self, nav: NavType) -> Self {
        let mut s = *self;
        s.nav = nav;
        s
    }
}

impl Wildcard for NavSignalId {
    fn is_wildcard(&self) -> bool {
        self.system.is_wildcard()
            || self.carrier.is_wildcard()
            || self.code.is_wildcard()
            || self.nav.is_wildcard()
    }
    fn matches(&self, stored: &Self) -> bool {
        self.system.matches(&stored.system)
            && self.carrier.matches(&stored.carrier)
            && self.code.matches(&stored.code)
            && self.nav.matches(&stored.nav)
    }
}

impl std::fmt::Display for NavSignalId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:x} {} {} {}", self.system, self.carrier, self.code, self.nav)
    }
}

impl FromStr for NavSignalId {
    type Err = ParsingError;
    /// Parses "G L1 CA GPSLNAV" descriptions, "M" standing for any system
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let items = s.split_whitespace().collect::<Vec<_>>();
        let [system, carrier, code, nav] = items[..] else {
            return Err(ParsingError::Signal(s.to_string()));
        };
        Ok(Self {
            system: Constellation::from_str(system)?,
            carrier: CarrierBand::from_str(carrier)?,
            code: TrackingCode::from_str(code)?,
            nav: NavType::from_str(nav)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn carrier_parsing() {
        for (desc, expected) in [
            ("L1", CarrierBand::L1),
            ("e1", CarrierBand::L1),
            (" L5 ", CarrierBand::L5),
            ("E5b", CarrierBand::E5b),
            ("any", CarrierBand::Any),
        ] {
            assert_eq!(CarrierBand::from_str(desc), Ok(expected));
        }
        assert!(CarrierBand::from_str("L9").is_err());
        assert_eq!(CarrierBand::from_str("E5b").unwrap().to_string(), "E5b");
    }
    #[test]
    fn code_and_nav_parsing() {
        assert_eq!(TrackingCode::from_str("C/A"), Ok(TrackingCode::CA));
        assert_eq!(TrackingCode::from_str("y"), Ok(TrackingCode::Y));
        assert!(TrackingCode::from_str("XX").is_err());
        assert_eq!(NavType::from_str("LNAV"), Ok(NavType::GPSLNAV));
        assert_eq!(NavType::from_str("GPSLNAV"), Ok(NavType::GPSLNAV));
        assert_eq!(NavType::from_str("inav"), Ok(NavType::GALINAV));
        assert!(NavType::from_str("unknown").is_err());
    }
    #[test]
    fn signal_parsing() {
        let l1ca = NavSignalId::new(
            Constellation::GPS,
            CarrierBand::L1,
            TrackingCode::CA,
            NavType::GPSLNAV,
        );
        assert_eq!(l1ca.to_string(), "G L1 CA GPSLNAV");
        assert_eq!(NavSignalId::from_str("G L1 CA GPSLNAV"), Ok(l1ca));
        assert_eq!(NavSignalId::from_str(" g  E1 C/A lnav "), Ok(l1ca));
        assert_eq!(NavSignalId::from_str(&NavSignalId::any().to_string()), Ok(NavSignalId::any()));
        assert_eq!(
            NavSignalId::from_str("E E5b E5bI INAV"),
            Ok(NavSignalId::new(
                Constellation::Galileo,
                CarrierBand::E5b,
                TrackingCode::E5bI,
                NavType::GALINAV
            ))
        );
        assert_eq!(
            NavSignalId::from_str("G L1 CA"),
            Err(ParsingError::Signal("G L1 CA".to_string()))
        );
        assert_eq!(
            NavSignalId::from_str("G L9 CA GPSLNAV"),
            Err(ParsingError::CarrierBand("L9".to_string()))
        );
        assert!(matches!(
            NavSignalId::from_str("X L1 CA GPSLNAV"),
            Err(ParsingError::Constellation(_))
        ));
    }
    #[test]
    fn signal_matching() {
        let l1ca = NavSignalId::new(
            Constellation::GPS,
            CarrierBand::L1,
            TrackingCode::CA,
            NavType::GPSLNAV,
        );
        assert!(!l1ca.is_wildcard());
        assert!(l1ca.matches(&l1ca));
        assert!(NavSignalId::any().matches(&l1ca));
        assert!(l1ca.with_carrier(CarrierBand::Any).matches(&l1ca));
        assert!(l1ca.with_code(TrackingCode::Any).matches(&l1ca));
        assert!(l1ca.with_nav(NavType::Any).matches(&l1ca));
        assert!(!l1ca.with_code(TrackingCode::Y).matches(&l1ca));
        assert!(!l1ca.with_carrier(CarrierBand::L2).matches(&l1ca));
        let qzss = NavSignalId {
            system: Constellation::QZSS,
            ..l1ca
        };
        assert!(!l1ca.matches(&qzss));
        // derived equality remains strict
        assert_ne!(l1ca.with_carrier(CarrierBand::Any), l1ca);
    }
}
