#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

#[macro_use]
extern crate num_derive;

pub mod factory;
pub mod filter;
pub mod health;
pub mod library;
pub mod navigation;
pub mod satellite;
pub mod signal;
pub mod wildcard;

mod constants;
mod error;

#[cfg(test)]
mod tests;

pub mod prelude {
    // export
    pub use crate::{
        error::{Error, ParsingError},
        factory::{NavDataFactory, NavDataSource, NavStore},
        filter::{NavFilters, NavIdFilter, NavSearchOrder, NavValidityType},
        health::SvHealth,
        library::NavLibrary,
        navigation::{
            Almanac, Ephemeris, Kepler, NavMessageId, NavMessageType, NavMessageTypes, NavPayload,
            NavRecord, Perturbations, SvClock, TimeOffset, Xvt,
        },
        satellite::NavSatelliteId,
        signal::{CarrierBand, NavSignalId, NavType, TrackingCode},
        wildcard::{Wildcard, ANY_PRN},
    };

    // pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}
