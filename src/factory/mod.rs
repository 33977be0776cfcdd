//! Navigation data factories: single source record stores
mod store;

pub use store::NavStore;

use crate::{
    filter::{NavFilters, NavIdFilter, NavSearchOrder, NavValidityType},
    navigation::{NavMessageId, NavMessageTypes, NavRecord},
    prelude::{Epoch, Error, SvHealth, TimeScale},
};

/// [NavDataFactory] is the query and mutation surface of one
/// navigation data source. This is what [crate::library::NavLibrary]
/// aggregates.
pub trait NavDataFactory {
    /// Searches the record answering `key` at `t`.
    /// Returns None when no record qualifies.
    fn find(
        &self,
        key: &NavMessageId,
        t: Epoch,
        health: SvHealth,
        validity: NavValidityType,
        order: NavSearchOrder,
    ) -> Option<NavRecord>;

    /// Searches the Time Offset record converting between
    /// `from` and `to` (in either direction) at `t`.
    fn get_offset_record(&self, from: TimeScale, to: TimeScale, t: Epoch) -> Option<NavRecord>;

    /// Returns the earliest validity start of all stored records
    fn initial_time(&self) -> Result<Epoch, Error>;

    /// Returns the latest validity end of all stored records
    fn final_time(&self) -> Result<Epoch, Error>;

    /// Removes every record matching `filter` whose validity
    /// does not intersect [begin, end).
    fn edit(&mut self, begin: Epoch, end: Epoch, filter: &NavIdFilter);

    /// Removes all records
    fn clear(&mut self);

    /// Number of stored records
    fn size(&self) -> usize;

    /// Returns current default [NavFilters]
    fn filters(&self) -> NavFilters;

    /// Updates default [NavFilters]
    fn set_filters(&mut self, filters: NavFilters);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Updates default [NavValidityType]
    fn set_validity_filter(&mut self, validity: NavValidityType) {
        let filters = self.filters().with_validity(validity);
        self.set_filters(filters);
    }

    /// Updates the set of message types taken into account
    fn set_type_filter(&mut self, types: NavMessageTypes) {
        let filters = self.filters().with_types(types);
        self.set_filters(filters);
    }
}

/// [NavDataSource] is the ingestion seam: anything that
/// may be decoded into a list of [NavRecord]s.
pub trait NavDataSource {
    /// Name of this source, used in traces and errors
    fn identifier(&self) -> String;

    /// Decodes all records of this source
    fn load(&self) -> Result<Vec<NavRecord>, Error>;
}

impl NavDataSource for Vec<NavRecord> {
    fn identifier(&self) -> String {
        "memory".to_string()
    }
    fn load(&self) -> Result<Vec<NavRecord>, Error> {
        Ok(self.clone())
    }
}

impl NavDataSource for [NavRecord] {
    fn identifier(&self) -> String {
        "memory".to_string()
    }
    fn load(&self) -> Result<Vec<NavRecord>, Error> {
        Ok(self.to_vec())
    }
}
