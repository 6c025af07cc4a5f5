// core/tests/test_parser.rs
use chrono::TimeDelta;
use tracker_core::{parse_day_record, parse_training_record, ErrorKind, ParseError, TrackerError};

#[test]
fn test_day_record_ok() {
    let rec = parse_day_record("6000,4h00m00s").unwrap();
    assert_eq!(rec.steps, 6000);
    assert_eq!(rec.duration, TimeDelta::hours(4));
}

#[test]
fn test_training_record_keeps_raw_label() {
    let rec = parse_training_record("3456,Running,45m00s").unwrap();
    assert_eq!(rec.steps, 3456);
    assert_eq!(rec.label, "Running");
    assert_eq!(rec.duration, TimeDelta::minutes(45));

    // ukjent etikett er ikke parserens ansvar
    let rec = parse_training_record("100,Flying,1h").unwrap();
    assert_eq!(rec.label, "Flying");
}

#[test]
fn test_field_count_checked_before_numbers() {
    for bad in ["", "100", "abc", "1,2,3"] {
        let err = parse_day_record(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "day {bad:?}");
    }
    for bad in ["", "100", "abc,1h", "x,y,z,w"] {
        let err = parse_training_record(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format, "training {bad:?}");
    }
}

#[test]
fn test_format_error_carries_counts() {
    match parse_training_record("100") {
        Err(TrackerError::Format { expected, found, record }) => {
            assert_eq!(expected, 3);
            assert_eq!(found, 1);
            assert_eq!(record, "100");
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn test_bad_steps_is_parse_error() {
    let err = parse_day_record("abc,1h").unwrap_err();
    assert!(matches!(err, TrackerError::Parse(ParseError::Steps { .. })));
    assert_eq!(parse_day_record("1.5,1h").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_bad_duration_is_parse_error() {
    let err = parse_day_record("100,1x").unwrap_err();
    assert!(matches!(err, TrackerError::Parse(ParseError::Duration(_))));
    assert_eq!(parse_training_record("100,Running,90").unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn test_non_positive_values_are_validation_errors() {
    assert_eq!(parse_day_record("0,1h").unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(parse_day_record("-10,1h").unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(parse_day_record("100,0s").unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(
        parse_training_record("100,Running,-5m").unwrap_err().kind(),
        ErrorKind::Validation
    );
}
