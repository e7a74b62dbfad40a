use crate::sim::SimTime;

#[test]
fn sim_time_unit_conversions() {
    assert_eq!(SimTime::from_secs_f64(1.5), SimTime(1_500_000_000));
    assert_eq!(SimTime::from_secs_f64(0.0), SimTime::ZERO);
    assert_eq!(SimTime(2_500_000_000).as_secs_f64(), 2.5);
}

#[test]
fn sim_time_unit_conversions_saturate_on_overflow() {
    assert_eq!(SimTime::from_secs_f64(1e30), SimTime(u64::MAX));
    assert_eq!(SimTime(u64::MAX).saturating_add(SimTime(1)), SimTime(u64::MAX));
    assert_eq!(SimTime(1).saturating_sub(SimTime(5)), SimTime::ZERO);
}

#[test]
fn saturating_conversion_clamps_infinity() {
    assert_eq!(SimTime::from_secs_f64_saturating(f64::INFINITY), SimTime(u64::MAX));
    assert_eq!(SimTime::from_secs_f64_saturating(2.0), SimTime(2_000_000_000));
}

#[test]
fn sim_time_from_secs_rounds_to_nearest_nanosecond() {
    assert_eq!(SimTime::from_secs_f64(1e-10), SimTime::ZERO);
    assert_eq!(SimTime::from_secs_f64(0.6e-9), SimTime(1));
}

#[test]
#[should_panic(expected = "non-negative")]
fn sim_time_rejects_negative_seconds() {
    let _ = SimTime::from_secs_f64(-0.5);
}

#[test]
#[should_panic(expected = "non-negative")]
fn sim_time_rejects_nan_seconds() {
    let _ = SimTime::from_secs_f64(f64::NAN);
}
