//! Search policies and filters
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    navigation::NavRecord,
    prelude::{Epoch, NavMessageTypes, NavSatelliteId, NavSignalId},
    wildcard::Wildcard,
};

/// Validity policy applied to lookups
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavValidityType {
    /// Only the records in force at the time of interest
    #[default]
    ValidOnly,
    /// Records in force at the time of interest, or, when none is,
    /// the most recent record that expired before it.
    Any,
}

/// Tie-break policy, when several records qualify
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavSearchOrder {
    /// First published wins: earliest validity start.
    /// Across factories, first registered factory wins.
    #[default]
    User,
    /// Record whose reference time is the closest
    /// to the time of interest, in either direction.
    Nearest,
}

impl NavSearchOrder {
    /// Selects the preferred record among `candidates`.
    /// Candidates must be yielded in precedence order:
    /// on a perfect tie, the first one is retained.
    pub(crate) fn select<'a, I>(&self, t: Epoch, candidates: I) -> Option<&'a NavRecord>
    where
        I: IntoIterator<Item = &'a NavRecord>,
    {
        match self {
            Self::User => candidates.into_iter().reduce(|best, rec| {
                if rec.begin < best.begin {
                    rec
                } else {
                    best
                }
            }),
            Self::Nearest => candidates.into_iter().reduce(|best, rec| {
                let (d_best, d_rec) = (best.distance(t), rec.distance(t));
                if d_rec < d_best || (d_rec == d_best && rec.time_stamp < best.time_stamp) {
                    rec
                } else {
                    best
                }
            }),
        }
    }
}

/// [NavFilters] gathers the default filters of a navigation store
/// or library. Lookups capture these settings at call time.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavFilters {
    /// Validity policy
    pub validity: NavValidityType,
    /// Message kinds taken into account. Excluded kinds
    /// are skipped by lookups, not deleted.
    pub types: NavMessageTypes,
}

impl NavFilters {
    /// Copies and returns [NavFilters] with updated [NavValidityType]
    pub fn with_validity(&self, validity: NavValidityType) -> Self {
        let mut s = *self;
        s.validity = validity;
        s
    }
    /// Copies and returns [NavFilters] with updated [NavMessageTypes]
    pub fn with_types(&self, types: NavMessageTypes) -> Self {
        let mut s = *self;
        s.types = types;
        s
    }
}

/// Identity restriction of an edit operation
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavIdFilter {
    /// All records are subject to edition
    #[default]
    All,
    /// Only records matching this satellite identity
    Satellite(NavSatelliteId),
    /// Only records matching this signal, whatever the satellite
    Signal(NavSignalId),
}

impl NavIdFilter {
    /// Returns true if the stored identity is subject to this filter
    pub fn matches(&self, stored: &NavSatelliteId) -> bool {
        match self {
            Self::All => true,
            Self::Satellite(id) => id.matches(stored),
            Self::Signal(signal) => signal.matches(&stored.signal),
        }
    }
}

impl From<NavSatelliteId> for NavIdFilter {
    fn from(id: NavSatelliteId) -> Self {
        Self::Satellite(id)
    }
}

impl From<NavSignalId> for NavIdFilter {
    fn from(signal: NavSignalId) -> Self {
        Self::Signal(signal)
    }
}
