//! Benchmarking navigation library lookups
//! over a full day of GPS ephemerides
extern crate criterion;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use std::{cell::RefCell, rc::Rc};

use navlib::prelude::*;

fn t0() -> Epoch {
    Epoch::from_gregorian(2020, 6, 25, 0, 0, 0, 0, TimeScale::GPST)
}

fn gps_l1ca(prn: u8) -> NavSatelliteId {
    NavSatelliteId::new(
        prn,
        prn,
        Constellation::GPS,
        CarrierBand::L1,
        TrackingCode::CA,
        NavType::GPSLNAV,
    )
}

fn ephemeris(toe: Epoch) -> Ephemeris {
    Ephemeris {
        iode: 1,
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

/// 32 satellites, one ephemeris every 2 hours, valid for 4 hours
fn daily_store() -> NavStore {
    let mut store = NavStore::new();
    for slot in 0..12 {
        let begin = t0() + Duration::from_hours(2.0 * slot as f64);
        let toe = begin + Duration::from_hours(2.0);
        for prn in 1..=32 {
            let record = NavRecord::new(
                gps_l1ca(prn),
                toe,
                begin,
                begin + Duration::from_hours(4.0),
                NavPayload::Ephemeris(ephemeris(toe)),
            )
            .with_health(SvHealth::Healthy);
            store.add_record(record).unwrap();
        }
    }
    store
}

fn benchmark(c: &mut Criterion) {
    let store = Rc::new(RefCell::new(daily_store()));
    let mut library = NavLibrary::new();
    library.add_factory(&store);

    let g17 = gps_l1ca(17);
    let any_g17 = NavSatelliteId::any_signal(g17.sat);
    let t = t0() + Duration::from_hours(13.25);

    let mut grp = c.benchmark_group("library");

    grp.bench_function("find/user", |b| {
        let key = NavMessageId::new(g17, NavMessageType::Ephemeris);
        b.iter(|| {
            library.find(
                black_box(&key),
                black_box(t),
                SvHealth::Any,
                NavValidityType::ValidOnly,
                NavSearchOrder::User,
            )
        })
    });

    grp.bench_function("find/nearest/wildcard", |b| {
        let key = NavMessageId::new(any_g17, NavMessageType::Ephemeris);
        b.iter(|| {
            library.find(
                black_box(&key),
                black_box(t),
                SvHealth::Healthy,
                NavValidityType::ValidOnly,
                NavSearchOrder::Nearest,
            )
        })
    });

    grp.bench_function("xvt", |b| {
        b.iter(|| library.get_xvt(black_box(&g17), black_box(t), false))
    });

    grp.bench_function("edit", |b| {
        b.iter(|| {
            let mut store = daily_store();
            store.edit(
                t0(),
                t0() + Duration::from_hours(13.0),
                &NavIdFilter::All,
            );
        })
    });

    grp.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
