use crate::{
    prelude::*,
    tests::toolkit::{gps_almanac, gps_ephemeris, hours},
};

fn g01() -> SV {
    SV::new(Constellation::GPS, 1)
}

#[test]
fn ephemeris_orbit() {
    let toe = hours(2.0);
    let eph = gps_ephemeris(toe);
    let a = eph.kepler.a;
    let e = eph.kepler.e;

    for dt_s in [-7200.0, -3600.0, 0.0, 900.0, 3600.0, 7199.0] {
        let t = toe + Duration::from_seconds(dt_s);
        let xvt = eph
            .xvt(g01(), t, SvHealth::Healthy)
            .unwrap_or_else(|| panic!("kepler failure at {}", t));

        // perigee / apogee, with harmonic corrections
        let radius = xvt.radius();
        assert!(radius > a * (1.0 - e) - 1.0E3, "radius {} too low", radius);
        assert!(radius < a * (1.0 + e) + 1.0E3, "radius {} too high", radius);

        // MEO velocity, in rotating frame
        let speed = xvt.velocity.norm();
        assert!(speed > 2.0E3 && speed < 4.5E3, "invalid speed {}", speed);

        assert!(xvt.relativistic_correction != 0.0);
        assert!(xvt.relativistic_correction.abs() < 5.0E-8);
        assert_eq!(xvt.health, SvHealth::Healthy);
    }
}

#[test]
fn analytic_velocity() {
    let toe = hours(2.0);
    let eph = gps_ephemeris(toe);
    let h = Duration::from_seconds(0.5);

    for dt_s in [-5400.0, -60.0, 0.0, 1234.5, 6000.0] {
        let t = toe + Duration::from_seconds(dt_s);
        let xvt = eph.xvt(g01(), t, SvHealth::Healthy).unwrap();
        let before = eph.xvt(g01(), t - h, SvHealth::Healthy).unwrap();
        let after = eph.xvt(g01(), t + h, SvHealth::Healthy).unwrap();

        let velocity = (after.position - before.position) / (2.0 * h.to_seconds());
        let err = (velocity - xvt.velocity).norm();
        assert!(err < 1.0E-2, "velocity error {} m/s at toe{:+}s", err, dt_s);
    }
}

#[test]
fn ephemeris_clock() {
    let toe = hours(2.0);
    let eph = gps_ephemeris(toe);

    let xvt = eph.xvt(g01(), toe, SvHealth::Healthy).unwrap();
    assert_eq!(xvt.clock_bias, eph.clock.bias);
    assert_eq!(xvt.clock_drift, eph.clock.drift);

    let t = toe + Duration::from_seconds(3600.0);
    let xvt = eph.xvt(g01(), t, SvHealth::Healthy).unwrap();
    let expected = eph.clock.bias + eph.clock.drift * 3600.0;
    assert!((xvt.clock_bias - expected).abs() < 1.0E-18);
    assert_eq!(
        xvt.clock_correction(),
        xvt.clock_bias + xvt.relativistic_correction
    );
}

#[test]
fn deterministic_evaluation() {
    let toe = hours(2.0);
    let eph = gps_ephemeris(toe);
    let t = toe + Duration::from_seconds(1800.0);
    let first = eph.xvt(g01(), t, SvHealth::Healthy).unwrap();
    for _ in 0..8 {
        assert_eq!(eph.xvt(g01(), t, SvHealth::Healthy), Some(first));
    }
}

#[test]
fn almanac_orbit() {
    let toa = hours(0.0);
    let alm = gps_almanac(toa);
    let a = alm.kepler.a;

    let t = toa + Duration::from_hours(12.0);
    let xvt = alm.xvt(g01(), t, SvHealth::Unhealthy).unwrap();
    assert!((xvt.radius() - a).abs() < a * alm.kepler.e + 1.0);
    assert_eq!(xvt.clock_bias, alm.af0 + alm.af1 * 43200.0);
    assert_eq!(xvt.clock_drift, alm.af1);
    assert_eq!(xvt.health, SvHealth::Unhealthy);

    // close enough to the ephemeris
    let eph = gps_ephemeris(toa);
    let reference = eph.xvt(g01(), toa, SvHealth::Healthy).unwrap();
    let coarse = alm.xvt(g01(), toa, SvHealth::Healthy).unwrap();
    assert!((reference.position - coarse.position).norm() < 1.0E5);
}

#[test]
fn kepler_divergence() {
    let toe = hours(0.0);
    let mut eph = gps_ephemeris(toe);
    // e > 1: the fixed point iteration never settles
    eph.kepler.e = 1.5;
    eph.kepler.m_0 = 2.0;
    assert!(eph.xvt(g01(), toe, SvHealth::Healthy).is_none());
}
