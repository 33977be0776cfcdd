//! Test fixtures
mod records;

pub use records::{
    almanac_record, clock_record, ephemeris_record, gps_almanac, gps_ephemeris, health_record,
    time_offset_record,
};

use std::{cell::RefCell, rc::Rc};

use crate::prelude::{
    CarrierBand, Constellation, Duration, Epoch, NavDataFactory, NavSatelliteId, NavStore, NavType,
    TimeScale, TrackingCode,
};

/// Reference epoch of all test scenarios
pub fn t0() -> Epoch {
    Epoch::from_gregorian(2020, 6, 25, 0, 0, 0, 0, TimeScale::GPST)
}

/// `t0` + given hours
pub fn hours(h: f64) -> Epoch {
    t0() + Duration::from_hours(h)
}

/// GPS L1 C/A LNAV identity of a satellite broadcasting about itself
pub fn gps_l1ca(prn: u8) -> NavSatelliteId {
    NavSatelliteId::new(
        prn,
        prn,
        Constellation::GPS,
        CarrierBand::L1,
        TrackingCode::CA,
        NavType::GPSLNAV,
    )
}

/// Store of 337 ephemeris records: record k describes PRN (k % 32) +1,
/// published every 2 hours by batches of 32, each valid for 4 hours.
/// Validity spans [t0, t0 + 24h).
pub fn store_337() -> NavStore {
    let mut store = NavStore::new();
    for k in 0..337_u16 {
        let prn = (k % 32) as u8 + 1;
        let begin = hours(2.0 * f64::from(k / 32));
        let record = ephemeris_record(gps_l1ca(prn), begin, begin + Duration::from_hours(4.0));
        store
            .add_record(record)
            .expect("valid ephemeris record");
    }
    assert_eq!(store.size(), 337);
    store
}

/// Wraps a store into a shared handle, ready for library registration
pub fn shared(store: NavStore) -> Rc<RefCell<NavStore>> {
    Rc::new(RefCell::new(store))
}
