use wyrm::profile::BANDS;
use wyrm::RadiusProfile;

#[test]
fn continuous_across_band_boundaries() {
    let profile = RadiusProfile::<f64>::default();
    for band in &BANDS[..BANDS.len() - 1] {
        let edge = band.end as f64;
        let left = profile.radius_at_t(edge - 1e-9);
        let right = profile.radius_at_t(edge);
        assert!(
            (left - right).abs() < 1e-6,
            "discontinuity at t = {}: {} vs {}",
            edge,
            left,
            right,
        );
    }
}

#[test]
fn monotonic_within_each_transition() {
    let profile = RadiusProfile::<f64>::default();
    for band in &BANDS {
        let from = profile.radius(band.from);
        let to = profile.radius(band.to);
        let (start, end) = (band.start as f64, band.end as f64);
        let mut prev = profile.radius_at_t(start);
        for k in 1..50 {
            let t = start + (end - start) * k as f64 / 50.0;
            let r = profile.radius_at_t(t);
            if to >= from {
                assert!(r >= prev - 1e-12, "band {:?}->{:?} not rising at t = {}", band.from, band.to, t);
            } else {
                assert!(r <= prev + 1e-12, "band {:?}->{:?} not falling at t = {}", band.from, band.to, t);
            }
            prev = r;
        }
    }
}

#[test]
fn plateaus_hold_their_radius() {
    let profile = RadiusProfile::<f32>::default();
    assert_eq!(profile.radius_at_t(0.0), profile.head);
    assert_eq!(profile.radius_at_t(0.03), profile.head);
    assert_eq!(profile.radius_at_t(0.4), profile.chest);
    assert_eq!(profile.radius_at_t(0.49), profile.chest);
}

#[test]
fn neck_transition_sample_is_pure_and_between_radii() {
    let profile = RadiusProfile::<f64>::default();
    let a = profile.radius_at(6, 85);
    let b = profile.radius_at(6, 85);
    assert_eq!(a, b);
    assert!(a > profile.neck && a < profile.head, "radius_at(6, 85) = {}", a);
}

#[test]
fn tail_tapers_to_tail_end() {
    let profile = RadiusProfile::<f64>::default();
    let last = profile.radius_at(84, 85);
    assert!(last > profile.tail_end && last < profile.tail_mid);
    assert!((profile.radius_at_t(1.0) - profile.tail_end).abs() < 1e-12);
}
