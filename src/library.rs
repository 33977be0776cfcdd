//! Multi source navigation data library
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

#[cfg(feature = "log")]
use log::debug;

use crate::{
    factory::NavDataFactory,
    filter::{NavFilters, NavIdFilter, NavSearchOrder, NavValidityType},
    navigation::{NavMessageId, NavMessageType, NavMessageTypes, NavRecord, Xvt},
    prelude::{Duration, Epoch, Error, NavSatelliteId, SvHealth, TimeScale},
};

/// Shared handle to a registered factory
type FactoryHandle = Rc<RefCell<dyn NavDataFactory>>;

/// [NavLibrary] resolves navigation queries across an ordered
/// list of [NavDataFactory]s. The library does not own its factories:
/// it only holds weak handles, a factory dropped elsewhere
/// is ignored from then on.
///
/// Registration order is the precedence order: with
/// [NavSearchOrder::User] the first factory that answers wins.
#[derive(Default)]
pub struct NavLibrary {
    factories: Vec<Weak<RefCell<dyn NavDataFactory>>>,
    filters: NavFilters,
}

impl std::fmt::Debug for NavLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("NavLibrary")
            .field("factories", &self.factory_count())
            .field("filters", &self.filters)
            .finish()
    }
}

impl NavLibrary {
    /// Builds a new [NavLibrary] with default [NavFilters]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new [NavLibrary] with given [NavFilters]
    pub fn with_filters(filters: NavFilters) -> Self {
        Self {
            filters,
            factories: Default::default(),
        }
    }

    /// Registers a new factory, after all previous ones.
    /// The library [NavFilters] are applied to this factory.
    ///
    /// Lookups skip a factory that is mutably borrowed at the time of
    /// the query. Filter updates, edits and [Self::clear] borrow every
    /// factory mutably, and panic if one is already borrowed.
    pub fn add_factory<F: NavDataFactory + 'static>(&mut self, factory: &Rc<RefCell<F>>) {
        factory.borrow_mut().set_filters(self.filters);
        let handle: FactoryHandle = factory.clone();
        self.factories.push(Rc::downgrade(&handle));
    }

    /// Number of registered factories still alive
    pub fn factory_count(&self) -> usize {
        self.factories().count()
    }

    /// Iterates over live factories, in registration order
    fn factories(&self) -> impl Iterator<Item = FactoryHandle> + '_ {
        self.factories.iter().filter_map(|weak| {
            let factory = weak.upgrade();
            #[cfg(feature = "log")]
            if factory.is_none() {
                debug!("skipping dropped factory");
            }
            factory
        })
    }

    /// Runs `query` on every live factory that may be borrowed,
    /// in registration order.
    fn query<'a, T, Q>(&'a self, query: Q) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
        Q: Fn(&dyn NavDataFactory) -> Option<T> + 'a,
    {
        self.factories()
            .filter_map(move |factory| match factory.try_borrow() {
                Ok(factory) => query(&*factory),
                Err(_) => {
                    #[cfg(feature = "log")]
                    debug!("skipping busy factory");
                    None
                },
            })
    }

    /// Returns current [NavFilters]
    pub fn filters(&self) -> NavFilters {
        self.filters
    }

    /// Updates the default [NavValidityType], of this library
    /// and all registered factories.
    pub fn set_validity_filter(&mut self, validity: NavValidityType) {
        self.filters = self.filters.with_validity(validity);
        for factory in self.factories() {
            factory.borrow_mut().set_validity_filter(validity);
        }
    }

    /// Updates the set of message types taken into account,
    /// by this library and all registered factories.
    pub fn set_type_filter(&mut self, types: NavMessageTypes) {
        self.filters = self.filters.with_types(types);
        for factory in self.factories() {
            factory.borrow_mut().set_type_filter(types);
        }
    }

    /// Searches the record answering `key` at `t`, across all factories.
    /// With [NavSearchOrder::User], the first factory that answers wins.
    /// With [NavSearchOrder::Nearest], the best candidate of each
    /// factory competes, registration order breaking perfect ties.
    ///
    /// With [NavValidityType::Any], a record in force in any factory
    /// prevails over expired records.
    pub fn find(
        &self,
        key: &NavMessageId,
        t: Epoch,
        health: SvHealth,
        validity: NavValidityType,
        order: NavSearchOrder,
    ) -> Option<NavRecord> {
        Self::passes(validity)
            .iter()
            .find_map(|validity| self.find_pass(key, t, health, *validity, order))
    }

    /// Validity policies to try, in order: expired records
    /// are only considered once nothing is in force.
    fn passes(validity: NavValidityType) -> &'static [NavValidityType] {
        match validity {
            NavValidityType::ValidOnly => &[NavValidityType::ValidOnly],
            NavValidityType::Any => &[NavValidityType::ValidOnly, NavValidityType::Any],
        }
    }

    fn find_pass(
        &self,
        key: &NavMessageId,
        t: Epoch,
        health: SvHealth,
        validity: NavValidityType,
        order: NavSearchOrder,
    ) -> Option<NavRecord> {
        let mut candidates = self.query(|factory| factory.find(key, t, health, validity, order));
        match order {
            NavSearchOrder::User => candidates.next(),
            NavSearchOrder::Nearest => {
                let candidates = candidates.collect::<Vec<_>>();
                order.select(t, &candidates).copied()
            },
        }
    }

    /// First record of `kinds` (in this order of preference) answering
    /// `sat` at `t`, using the library validity policy and [NavSearchOrder::User].
    fn find_first_kind(
        &self,
        sat: &NavSatelliteId,
        kinds: &[NavMessageType],
        t: Epoch,
        health: SvHealth,
    ) -> Option<NavRecord> {
        Self::passes(self.filters.validity)
            .iter()
            .find_map(|validity| {
                kinds.iter().find_map(|kind| {
                    let key = NavMessageId::new(*sat, *kind);
                    self.find_pass(&key, t, health, *validity, NavSearchOrder::User)
                })
            })
    }

    /// Resolves [Xvt] of `sat` at `t` from its Ephemeris.
    /// When no Ephemeris is found and `use_alm` is set, the Almanac is used.
    /// Health is not taken into account.
    pub fn get_xvt(&self, sat: &NavSatelliteId, t: Epoch, use_alm: bool) -> Option<Xvt> {
        let kinds: &[NavMessageType] = if use_alm {
            &[NavMessageType::Ephemeris, NavMessageType::Almanac]
        } else {
            &[NavMessageType::Ephemeris]
        };

        let record = self.find_first_kind(sat, kinds, t, SvHealth::Any)?;

        #[cfg(feature = "log")]
        if record.kind() == NavMessageType::Almanac {
            debug!("{}: no ephemeris at {}, using almanac", sat, t);
        }

        record.xvt(t)
    }

    /// Resolves [Xvt] of `sat` at `t` from an Ephemeris
    /// reporting `health`. Almanacs are never used.
    pub fn get_xvt_with_health(
        &self,
        sat: &NavSatelliteId,
        t: Epoch,
        health: SvHealth,
    ) -> Option<Xvt> {
        let key = NavMessageId::new(*sat, NavMessageType::Ephemeris);
        let record = self.find(&key, t, health, self.filters.validity, NavSearchOrder::User)?;
        record.xvt(t)
    }

    /// Returns the health of `sat` at `t`, if passing `health`.
    /// Health messages prevail over Ephemeris, which prevail over Almanac,
    /// a message in force prevailing over any expired one.
    pub fn get_health(&self, sat: &NavSatelliteId, t: Epoch, health: SvHealth) -> Option<SvHealth> {
        let kinds = [
            NavMessageType::Health,
            NavMessageType::Ephemeris,
            NavMessageType::Almanac,
        ];
        self.find_first_kind(sat, &kinds, t, health)
            .map(|record| record.health)
    }

    /// Searches the Time Offset record converting between
    /// `from` and `to` at `t`. First factory that answers with a record
    /// in force wins, then first factory that answers at all.
    pub fn get_offset(&self, from: TimeScale, to: TimeScale, t: Epoch) -> Option<NavRecord> {
        let mut fallback = None;
        for record in self.query(|factory| factory.get_offset_record(from, to, t)) {
            if record.contains(t) {
                return Some(record);
            }
            fallback = fallback.or(Some(record));
        }
        fallback
    }

    /// Returns Δ such that `t_to = t_from + Δ`, at `t`.
    pub fn get_time_offset(&self, from: TimeScale, to: TimeScale, t: Epoch) -> Option<Duration> {
        let record = self.get_offset(from, to, t)?;
        let offset_s = record.time_offset()?.offset(from, to, t)?;
        Some(Duration::from_seconds(offset_s))
    }

    /// Earliest validity start across all factories.
    /// Empty factories are ignored.
    pub fn initial_time(&self) -> Result<Epoch, Error> {
        self.query(|factory| factory.initial_time().ok())
            .min()
            .ok_or(Error::EmptyStore)
    }

    /// Latest validity end across all factories.
    /// Empty factories are ignored.
    pub fn final_time(&self) -> Result<Epoch, Error> {
        self.query(|factory| factory.final_time().ok())
            .max()
            .ok_or(Error::EmptyStore)
    }

    /// Removes, from every factory, the records whose
    /// validity does not intersect [begin, end).
    pub fn edit(&mut self, begin: Epoch, end: Epoch) {
        self.edit_matching(begin, end, NavIdFilter::All);
    }

    /// Removes, from every factory, the records matching `filter`
    /// whose validity does not intersect [begin, end).
    /// Records that do not match `filter` are preserved.
    pub fn edit_matching<F: Into<NavIdFilter>>(&mut self, begin: Epoch, end: Epoch, filter: F) {
        let filter = filter.into();
        for factory in self.factories() {
            factory.borrow_mut().edit(begin, end, &filter);
        }
    }

    /// Empties every factory. Factories remain registered.
    pub fn clear(&mut self) {
        for factory in self.factories() {
            factory.borrow_mut().clear();
        }
    }

    /// Total number of records across all factories
    pub fn size(&self) -> usize {
        self.query(|factory| Some(factory.size())).sum()
    }
}
