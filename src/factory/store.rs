use std::collections::BTreeMap;

use itertools::Itertools;

#[cfg(feature = "log")]
use log::{debug, warn};

use crate::{
    factory::{NavDataFactory, NavDataSource},
    filter::{NavFilters, NavIdFilter, NavSearchOrder, NavValidityType},
    navigation::{NavMessageId, NavMessageType, NavRecord},
    prelude::{Epoch, Error, NavSatelliteId, SvHealth, TimeScale},
    wildcard::Wildcard,
};

/// Records of one kind and one identity, indexed by validity start.
/// Records sharing the same start are kept in insertion order.
type ByBegin = BTreeMap<Epoch, Vec<NavRecord>>;

/// [NavStore] is the in-memory [NavDataFactory]:
/// records are indexed by message type, identity and validity start.
#[derive(Default, Debug, Clone)]
pub struct NavStore {
    filters: NavFilters,
    records: BTreeMap<NavMessageType, BTreeMap<NavSatelliteId, ByBegin>>,
}

impl NavStore {
    /// Builds a new empty [NavStore] with default [NavFilters]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new empty [NavStore] with given default [NavFilters]
    pub fn with_filters(filters: NavFilters) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    /// Stores a new [NavRecord].
    /// Wildcard identities and empty validity intervals are rejected.
    pub fn add_record(&mut self, record: NavRecord) -> Result<(), Error> {
        record.validate()?;
        self.records
            .entry(record.kind())
            .or_default()
            .entry(record.sat)
            .or_default()
            .entry(record.begin)
            .or_default()
            .push(record);
        Ok(())
    }

    /// Loads all records of a [NavDataSource].
    /// Records that may not be stored are skipped.
    /// Returns the number of records added.
    pub fn add_data_source<S: NavDataSource + ?Sized>(&mut self, source: &S) -> Result<usize, Error> {
        let records = source.load()?;
        #[cfg(feature = "log")]
        let total = records.len();
        let mut added = 0;
        for record in records {
            match self.add_record(record) {
                Ok(_) => added += 1,
                #[cfg(feature = "log")]
                Err(e) => warn!("{}: skipping record: {}", source.identifier(), e),
                #[cfg(not(feature = "log"))]
                Err(_) => {},
            }
        }
        #[cfg(feature = "log")]
        debug!("{}: {}/{} records added", source.identifier(), added, total);
        Ok(added)
    }

    /// Iterates over all stored records, by message type,
    /// identity, then validity start.
    pub fn iter(&self) -> impl Iterator<Item = &NavRecord> + '_ {
        self.records
            .values()
            .flat_map(|by_sat| by_sat.values())
            .flat_map(|by_begin| by_begin.values())
            .flatten()
    }

    /// Number of stored records of this kind
    pub fn count(&self, kind: NavMessageType) -> usize {
        self.records
            .get(&kind)
            .map(|by_sat| {
                by_sat
                    .values()
                    .flat_map(|by_begin| by_begin.values())
                    .map(|records| records.len())
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Returns (earliest start, latest end) of validity
    fn time_span(&self) -> Result<(Epoch, Epoch), Error> {
        self.iter()
            .flat_map(|rec| [rec.begin, rec.end])
            .minmax()
            .into_option()
            .ok_or(Error::EmptyStore)
    }

    /// Resolves the preferred record of this kind, matching `key`,
    /// at `t`, among the records passing `accept`.
    fn resolve<F>(
        &self,
        key: &NavSatelliteId,
        kind: NavMessageType,
        t: Epoch,
        validity: NavValidityType,
        order: NavSearchOrder,
        accept: F,
    ) -> Option<&NavRecord>
    where
        F: Fn(&NavRecord) -> bool,
    {
        let by_sat = self.records.get(&kind)?;

        let (in_force, expired): (Vec<&NavRecord>, Vec<&NavRecord>) = by_sat
            .iter()
            .filter(|(id, _)| key.matches(id))
            .flat_map(|(_, by_begin)| by_begin.range(..=t))
            .flat_map(|(_, records)| records.iter())
            .filter(|&rec| accept(rec))
            .partition(|rec| rec.contains(t));

        if !in_force.is_empty() || validity == NavValidityType::ValidOnly {
            return order.select(t, in_force);
        }

        // most recent expired record
        let latest = expired.iter().map(|rec| rec.end).max()?;
        order.select(t, expired.into_iter().filter(|rec| rec.end == latest))
    }

    /// Returns true if `rec` passes the health filter at `t`.
    /// Records that do not report health are checked
    /// against the Health message of their subject satellite.
    fn health_ok(
        &self,
        rec: &NavRecord,
        t: Epoch,
        health: SvHealth,
        validity: NavValidityType,
    ) -> bool {
        if health == SvHealth::Any {
            return true;
        }
        if rec.kind().is_health_bearing() {
            return health.accepts(rec.health);
        }
        let companion = NavSatelliteId::any_signal(rec.sat.sat);
        self.resolve(
            &companion,
            NavMessageType::Health,
            t,
            validity,
            NavSearchOrder::User,
            |_| true,
        )
        .map(|status| health.accepts(status.health))
        .unwrap_or(false)
    }
}

impl NavDataFactory for NavStore {
    fn find(
        &self,
        key: &NavMessageId,
        t: Epoch,
        health: SvHealth,
        validity: NavValidityType,
        order: NavSearchOrder,
    ) -> Option<NavRecord> {
        if !self.filters.types.accepts(key.kind) {
            return None;
        }
        self.resolve(&key.sat, key.kind, t, validity, order, |rec| {
            self.health_ok(rec, t, health, validity)
        })
        .copied()
    }

    fn get_offset_record(&self, from: TimeScale, to: TimeScale, t: Epoch) -> Option<NavRecord> {
        if !self.filters.types.accepts(NavMessageType::TimeOffset) {
            return None;
        }
        self.resolve(
            &NavSatelliteId::any(),
            NavMessageType::TimeOffset,
            t,
            self.filters.validity,
            NavSearchOrder::User,
            |rec| {
                rec.time_offset()
                    .map(|sto| sto.covers(from, to))
                    .unwrap_or(false)
            },
        )
        .copied()
    }

    fn initial_time(&self) -> Result<Epoch, Error> {
        let (begin, _) = self.time_span()?;
        Ok(begin)
    }

    fn final_time(&self) -> Result<Epoch, Error> {
        let (_, end) = self.time_span()?;
        Ok(end)
    }

    fn edit(&mut self, begin: Epoch, end: Epoch, filter: &NavIdFilter) {
        for by_sat in self.records.values_mut() {
            for (id, by_begin) in by_sat.iter_mut() {
                if !filter.matches(id) {
                    continue;
                }
                for records in by_begin.values_mut() {
                    records.retain(|rec| rec.intersects(begin, end));
                }
                by_begin.retain(|_, records| !records.is_empty());
            }
            by_sat.retain(|_, by_begin| !by_begin.is_empty());
        }
        self.records.retain(|_, by_sat| !by_sat.is_empty());
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn size(&self) -> usize {
        self.iter().count()
    }

    fn filters(&self) -> NavFilters {
        self.filters
    }

    fn set_filters(&mut self, filters: NavFilters) {
        self.filters = filters;
    }
}
