//! Satellite health status
use std::str::FromStr;

use num_traits::FromPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::ParsingError;

/// Satellite health, as reported by a navigation message.
/// [SvHealth::Any] is only meaningful as a search filter.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SvHealth {
    /// Health status has not been determined
    #[default]
    Unknown = 0,
    /// Matches any health status (filter only)
    Any = 1,
    /// Satellite is usable
    Healthy = 2,
    /// Satellite is not usable
    Unhealthy = 3,
    /// Satellite is usable with reduced accuracy
    Degraded = 4,
}

impl SvHealth {
    /// Returns true if a record reporting `reported` health
    /// passes this filter.
    pub fn accepts(&self, reported: SvHealth) -> bool {
        *self == Self::Any || *self == reported
    }
}

impl TryFrom<u8> for SvHealth {
    type Error = ParsingError;
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code).ok_or(ParsingError::HealthCode(code))
    }
}

impl std::fmt::Display for SvHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Any => write!(f, "Any"),
            Self::Healthy => write!(f, "Healthy"),
            Self::Unhealthy => write!(f, "Unhealthy"),
            Self::Degraded => write!(f, "Degraded"),
        }
    }
}

impl FromStr for SvHealth {
    type Err = ParsingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "any" => Ok(Self::Any),
            "healthy" => Ok(Self::Healthy),
            "unhealthy" => Ok(Self::Unhealthy),
            "degraded" => Ok(Self::Degraded),
            _ => Err(ParsingError::Health(s.to_string())),
        }
    }
}
