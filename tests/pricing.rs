// tests/pricing.rs
//
// Discount schedule and rounding.
//
use coach_scout::pricing::{Duration, Quote, quote};

#[test]
fn reference_quotes() {
    assert_eq!(
        quote(1000.0, Duration::W12).unwrap(),
        Quote { per_week: 1000, total: 12000, discount_percent: 0 }
    );
    assert_eq!(
        quote(1000.0, Duration::W24).unwrap(),
        Quote { per_week: 900, total: 21600, discount_percent: 10 }
    );
    assert_eq!(
        quote(1000.0, Duration::W52).unwrap(),
        Quote { per_week: 800, total: 41600, discount_percent: 20 }
    );
}

#[test]
fn zero_base_is_zero_at_every_tier() {
    for d in Duration::ALL {
        let q = quote(0.0, d).unwrap();
        assert_eq!(q.per_week, 0);
        assert_eq!(q.total, 0);
        assert_eq!(q.discount_percent, d.discount_percent());
    }
}

#[test]
fn rounding_is_half_up() {
    // 745 * 0.9 = 670.5 → 671
    assert_eq!(quote(745.0, Duration::W24).unwrap().per_week, 671);
    // 749 * 0.9 = 674.1 → 674
    assert_eq!(quote(749.0, Duration::W24).unwrap().per_week, 674);
    // 1499 * 0.8 = 1199.2 → 1199
    assert_eq!(quote(1499.0, Duration::W52).unwrap().per_week, 1199);
}

#[test]
fn total_is_rounded_per_week_times_weeks() {
    let q = quote(745.0, Duration::W24).unwrap();
    assert_eq!(q.total, q.per_week * 24);
}

#[test]
fn invalid_base_prices_error() {
    assert!(quote(-1.0, Duration::W12).is_err());
    assert!(quote(f64::NAN, Duration::W24).is_err());
    assert!(quote(f64::INFINITY, Duration::W52).is_err());
}

#[test]
fn huge_base_prices_error_instead_of_overflowing() {
    // 5e17 * 0.8 * 52 would wrap a u64; must come back as Err, not panic.
    assert!(quote(5.0e17, Duration::W52).is_err());
    assert!(quote(f64::MAX, Duration::W12).is_err());
    // The largest representable quotes still succeed.
    assert!(quote(1.0e15, Duration::W52).is_ok());
}

#[test]
fn duration_tiers_are_closed() {
    assert_eq!(Duration::from_weeks(12).unwrap(), Duration::W12);
    assert_eq!(Duration::from_weeks(24).unwrap(), Duration::W24);
    assert_eq!(Duration::from_weeks(52).unwrap(), Duration::W52);
    assert!(Duration::from_weeks(0).is_err());
    assert!(Duration::from_weeks(13).is_err());
    assert!(Duration::from_weeks(104).is_err());
}

#[test]
fn duration_parses_from_text() {
    assert_eq!("24".parse::<Duration>().unwrap(), Duration::W24);
    assert_eq!(" 52 ".parse::<Duration>().unwrap(), Duration::W52);
    assert!("week".parse::<Duration>().is_err());
    assert!("21".parse::<Duration>().is_err());
}
