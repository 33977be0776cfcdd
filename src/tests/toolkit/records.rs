use crate::prelude::{
    Almanac, Duration, Ephemeris, Epoch, Kepler, NavPayload, NavRecord, NavSatelliteId,
    Perturbations, SvClock, SvHealth, TimeOffset, TimeScale,
};

/// Realistic GPS ephemeris, referenced to `toe`
pub fn gps_ephemeris(toe: Epoch) -> Ephemeris {
    Ephemeris {
        iode: 42,
        clock: SvClock::new(toe, -2.16E-4, 4.32E-12, 0.0),
        toe,
        kepler: Kepler::from_sqrt_a(5153.65, 0.0056, 0.96, 1.2, -1.0, 0.5),
        perturbations: Perturbations {
            dn: 4.5E-9,
            i_dot: 1.0E-10,
            omega_dot: -8.0E-9,
            cus: 8.0E-6,
            cuc: 1.0E-6,
            cis: -5.0E-8,
            cic: 1.0E-7,
            crs: 20.0,
            crc: 200.0,
        },
    }
}

/// Realistic GPS almanac, referenced to `toa`
pub fn gps_almanac(toa: Epoch) -> Almanac {
    Almanac {
        toa,
        af0: -2.1E-4,
        af1: 3.6E-12,
        kepler: Kepler::from_sqrt_a(5153.6, 0.0055, 0.96, 1.2, -1.0, 0.5),
        omega_dot: -8.0E-9,
    }
}

/// Healthy ephemeris record valid over [begin, end),
/// with ToE in the middle of the validity.
pub fn ephemeris_record(sat: NavSatelliteId, begin: Epoch, end: Epoch) -> NavRecord {
    let toe = begin + Duration::from_seconds((end - begin).to_seconds() / 2.0);
    NavRecord::new(
        sat,
        toe,
        begin,
        end,
        NavPayload::Ephemeris(gps_ephemeris(toe)),
    )
    .with_health(SvHealth::Healthy)
}

/// Healthy almanac record valid over [begin, end), referenced to `begin`
pub fn almanac_record(sat: NavSatelliteId, begin: Epoch, end: Epoch) -> NavRecord {
    NavRecord::new(
        sat,
        begin,
        begin,
        end,
        NavPayload::Almanac(gps_almanac(begin)),
    )
    .with_health(SvHealth::Healthy)
}

/// Health status record valid over [begin, end)
pub fn health_record(
    sat: NavSatelliteId,
    begin: Epoch,
    end: Epoch,
    health: SvHealth,
) -> NavRecord {
    NavRecord::new(sat, begin, begin, end, NavPayload::Health).with_health(health)
}

/// Clock record valid over [begin, end). Clock messages do not report health.
pub fn clock_record(sat: NavSatelliteId, begin: Epoch, end: Epoch) -> NavRecord {
    NavRecord::new(
        sat,
        begin,
        begin,
        end,
        NavPayload::Clock(SvClock::new(begin, 1.0E-5, 1.0E-12, 0.0)),
    )
}

/// GPST to UTC offset record valid over [begin, end), without drift
pub fn time_offset_record(
    sat: NavSatelliteId,
    begin: Epoch,
    end: Epoch,
    delta_t_ls: f64,
) -> NavRecord {
    let sto = TimeOffset::new(TimeScale::GPST, TimeScale::UTC, delta_t_ls, 0.0, 0.0, begin);
    NavRecord::new(sat, begin, begin, end, NavPayload::TimeOffset(sto))
}
