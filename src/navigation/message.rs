use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{NavSatelliteId, ParsingError};

/// Kind of navigation message
#[derive(Default, Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavMessageType {
    #[default]
    Unknown,
    /// Coarse orbit and clock of the constellation
    Almanac,
    /// Precise orbit and clock of the subject satellite
    Ephemeris,
    /// Offset between two time systems
    TimeOffset,
    /// Satellite health status
    Health,
    /// Satellite clock correction
    Clock,
}

impl NavMessageType {
    /// Returns the [NavMessageTypes] flag for this kind
    pub fn flag(&self) -> NavMessageTypes {
        match self {
            Self::Unknown => NavMessageTypes::UNKNOWN,
            Self::Almanac => NavMessageTypes::ALMANAC,
            Self::Ephemeris => NavMessageTypes::EPHEMERIS,
            Self::TimeOffset => NavMessageTypes::TIME_OFFSET,
            Self::Health => NavMessageTypes::HEALTH,
            Self::Clock => NavMessageTypes::CLOCK,
        }
    }
    /// Returns true if messages of this kind report
    /// the health status of their subject satellite.
    pub fn is_health_bearing(&self) -> bool {
        matches!(self, Self::Almanac | Self::Ephemeris | Self::Health)
    }
}

impl std::str::FromStr for NavMessageType {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Unknown" => Ok(Self::Unknown),
            "Almanac" => Ok(Self::Almanac),
            "Ephemeris" => Ok(Self::Ephemeris),
            "TimeOffset" => Ok(Self::TimeOffset),
            "Health" => Ok(Self::Health),
            "Clock" => Ok(Self::Clock),
            _ => Err(ParsingError::NavMessageType(s.to_string())),
        }
    }
}

impl std::fmt::Display for NavMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Almanac => write!(f, "Almanac"),
            Self::Ephemeris => write!(f, "Ephemeris"),
            Self::TimeOffset => write!(f, "TimeOffset"),
            Self::Health => write!(f, "Health"),
            Self::Clock => write!(f, "Clock"),
        }
    }
}

bitflags! {
    /// Set of [NavMessageType]s, used as a type filter.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct NavMessageTypes: u8 {
        const UNKNOWN = 0x01;
        const ALMANAC = 0x02;
        const EPHEMERIS = 0x04;
        const TIME_OFFSET = 0x08;
        const HEALTH = 0x10;
        const CLOCK = 0x20;
    }
}

impl Default for NavMessageTypes {
    /// Accepts all message types
    fn default() -> Self {
        Self::all()
    }
}

impl NavMessageTypes {
    /// Returns true if this set accepts given [NavMessageType]
    pub fn accepts(&self, kind: NavMessageType) -> bool {
        self.contains(kind.flag())
    }
}

impl From<NavMessageType> for NavMessageTypes {
    fn from(kind: NavMessageType) -> Self {
        kind.flag()
    }
}

impl FromIterator<NavMessageType> for NavMessageTypes {
    fn from_iter<I: IntoIterator<Item = NavMessageType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}

/// [NavMessageId] is the query key of message lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMessageId {
    /// Message source
    pub sat: NavSatelliteId,
    /// Message kind
    pub kind: NavMessageType,
}

impl NavMessageId {
    /// Builds a new [NavMessageId]
    pub fn new(sat: NavSatelliteId, kind: NavMessageType) -> Self {
        Self { sat, kind }
    }
    /// Copies and returns [NavMessageId] with updated [NavMessageType]
    pub fn with_kind(&self, kind: NavMessageType) -> Self {
        Self {
            sat: self.sat,
            kind,
        }
    }
}

impl std::fmt::Display for NavMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.sat, self.kind)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn message_type_parsing() {
        for kind in [
            NavMessageType::Unknown,
            NavMessageType::Almanac,
            NavMessageType::Ephemeris,
            NavMessageType::TimeOffset,
            NavMessageType::Health,
            NavMessageType::Clock,
        ] {
            assert_eq!(NavMessageType::from_str(&kind.to_string()), Ok(kind));
        }
        assert!(NavMessageType::from_str("Iono").is_err());
    }
    #[test]
    fn type_set() {
        let all = NavMessageTypes::default();
        assert!(all.accepts(NavMessageType::Clock));
        assert!(all.accepts(NavMessageType::Ephemeris));

        let set: NavMessageTypes = [NavMessageType::Almanac, NavMessageType::Health]
            .into_iter()
            .collect();
        assert!(set.accepts(NavMessageType::Almanac));
        assert!(set.accepts(NavMessageType::Health));
        assert!(!set.accepts(NavMessageType::Ephemeris));
        assert!(!NavMessageTypes::empty().accepts(NavMessageType::Almanac));
    }
    #[test]
    fn health_bearing() {
        assert!(NavMessageType::Ephemeris.is_health_bearing());
        assert!(NavMessageType::Almanac.is_health_bearing());
        assert!(NavMessageType::Health.is_health_bearing());
        assert!(!NavMessageType::Clock.is_health_bearing());
        assert!(!NavMessageType::TimeOffset.is_health_bearing());
    }
}
