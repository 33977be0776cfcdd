#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    navigation::{Almanac, Ephemeris, SvClock, TimeOffset, Xvt},
    prelude::{Duration, Epoch, Error, NavMessageId, NavMessageType, NavSatelliteId, SvHealth},
    wildcard::Wildcard,
};

/// Kind specific content of a [NavRecord]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavPayload {
    Ephemeris(Ephemeris),
    Almanac(Almanac),
    /// Health status only: see [NavRecord::health]
    Health,
    TimeOffset(TimeOffset),
    Clock(SvClock),
}

impl NavPayload {
    /// Returns the [NavMessageType] of this payload
    pub fn kind(&self) -> NavMessageType {
        match self {
            Self::Ephemeris(_) => NavMessageType::Ephemeris,
            Self::Almanac(_) => NavMessageType::Almanac,
            Self::Health => NavMessageType::Health,
            Self::TimeOffset(_) => NavMessageType::TimeOffset,
            Self::Clock(_) => NavMessageType::Clock,
        }
    }
}

/// A stored navigation message
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavRecord {
    /// Message source
    pub sat: NavSatelliteId,
    /// Reported health of the subject satellite
    pub health: SvHealth,
    /// Reference time of this message
    pub time_stamp: Epoch,
    /// Start of validity (included)
    pub begin: Epoch,
    /// End of validity (excluded)
    pub end: Epoch,
    /// Content
    pub payload: NavPayload,
}

impl NavRecord {
    /// Builds a new [NavRecord] valid over [begin, end),
    /// with [SvHealth::Unknown] health status.
    pub fn new(
        sat: NavSatelliteId,
        time_stamp: Epoch,
        begin: Epoch,
        end: Epoch,
        payload: NavPayload,
    ) -> Self {
        Self {
            sat,
            health: SvHealth::Unknown,
            time_stamp,
            begin,
            end,
            payload,
        }
    }

    /// Copies and returns [NavRecord] with updated [SvHealth]
    pub fn with_health(&self, health: SvHealth) -> Self {
        let mut s = *self;
        s.health = health;
        s
    }

    pub fn kind(&self) -> NavMessageType {
        self.payload.kind()
    }

    /// Returns the [NavMessageId] this record answers to
    pub fn message_id(&self) -> NavMessageId {
        NavMessageId::new(self.sat, self.kind())
    }

    /// Returns true if this record is in force at `t`
    pub fn contains(&self, t: Epoch) -> bool {
        self.begin <= t && t < self.end
    }

    /// Returns true if the validity of this record intersects [begin, end).
    /// An empty range intersects nothing.
    pub fn intersects(&self, begin: Epoch, end: Epoch) -> bool {
        begin < end && self.begin < end && self.end > begin
    }

    /// Absolute time distance between `t` and the reference time
    pub fn distance(&self, t: Epoch) -> Duration {
        (t - self.time_stamp).abs()
    }

    /// Returns the [TimeOffset] content, if any
    pub fn time_offset(&self) -> Option<&TimeOffset> {
        match &self.payload {
            NavPayload::TimeOffset(sto) => Some(sto),
            _ => None,
        }
    }

    /// Returns the onboard clock model, if any
    pub fn clock(&self) -> Option<&SvClock> {
        match &self.payload {
            NavPayload::Ephemeris(eph) => Some(&eph.clock),
            NavPayload::Clock(clock) => Some(clock),
            _ => None,
        }
    }

    /// Evaluates this record at `t`. Only [Ephemeris] and [Almanac]
    /// records resolve a satellite state.
    pub fn xvt(&self, t: Epoch) -> Option<Xvt> {
        match &self.payload {
            NavPayload::Ephemeris(eph) => eph.xvt(self.sat.sat, t, self.health),
            NavPayload::Almanac(alm) => alm.xvt(self.sat.sat, t, self.health),
            _ => None,
        }
    }

    /// Verifies this record may be stored
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.sat.is_wildcard() {
            return Err(Error::WildcardIdentity(self.sat));
        }
        if self.health == SvHealth::Any {
            return Err(Error::WildcardHealth(self.sat));
        }
        if self.begin >= self.end {
            return Err(Error::InvalidInterval {
                begin: self.begin,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for NavRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} [{}, {}) {}",
            self.message_id(),
            self.begin,
            self.end,
            self.health
        )
    }
}
