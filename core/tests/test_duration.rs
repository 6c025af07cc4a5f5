// core/tests/test_duration.rs
use chrono::TimeDelta;
use tracker_core::duration::{hours, minutes};
use tracker_core::{parse_duration, DurationError};

#[test]
fn test_compact_hours_minutes() {
    assert_eq!(parse_duration("1h30m").unwrap(), TimeDelta::minutes(90));
    assert_eq!(parse_duration("4h00m00s").unwrap(), TimeDelta::hours(4));
    assert_eq!(parse_duration("45m00s").unwrap(), TimeDelta::seconds(2700));
}

#[test]
fn test_fraction_and_small_units() {
    assert_eq!(parse_duration("1.5h").unwrap(), TimeDelta::minutes(90));
    assert_eq!(parse_duration(".5s").unwrap(), TimeDelta::milliseconds(500));
    assert_eq!(parse_duration("300ms").unwrap(), TimeDelta::milliseconds(300));
    assert_eq!(parse_duration("2us").unwrap(), TimeDelta::microseconds(2));
    assert_eq!(parse_duration("2µs").unwrap(), TimeDelta::microseconds(2));
    assert_eq!(parse_duration("7ns").unwrap(), TimeDelta::nanoseconds(7));
}

#[test]
fn test_sign_and_zero() {
    assert_eq!(parse_duration("-5m").unwrap(), TimeDelta::minutes(-5));
    assert_eq!(parse_duration("+2s").unwrap(), TimeDelta::seconds(2));
    assert_eq!(parse_duration("0").unwrap(), TimeDelta::zero());
    assert_eq!(parse_duration("-0").unwrap(), TimeDelta::zero());
}

#[test]
fn test_rejects_malformed() {
    assert!(matches!(parse_duration(""), Err(DurationError::Invalid(_))));
    assert!(matches!(parse_duration("-"), Err(DurationError::Invalid(_))));
    assert!(matches!(parse_duration("h"), Err(DurationError::Invalid(_))));
    assert!(matches!(parse_duration(".h"), Err(DurationError::Invalid(_))));
    assert!(matches!(parse_duration("1"), Err(DurationError::MissingUnit(_))));
    assert!(matches!(parse_duration("1h30"), Err(DurationError::MissingUnit(_))));
    assert!(matches!(
        parse_duration("3d"),
        Err(DurationError::UnknownUnit { ref unit, .. }) if unit == "d"
    ));
    assert!(parse_duration("1h 30m").is_err());
}

#[test]
fn test_rejects_overflow() {
    assert!(matches!(
        parse_duration("9999999999h"),
        Err(DurationError::Invalid(_))
    ));
}

#[test]
fn test_fractional_magnitudes() {
    let d = parse_duration("45m").unwrap();
    assert!((hours(d) - 0.75).abs() < 1e-12);
    assert!((minutes(d) - 45.0).abs() < 1e-12);

    let d = parse_duration("1h30m30s").unwrap();
    assert!((minutes(d) - 90.5).abs() < 1e-12);
}
