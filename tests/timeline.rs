//! Timestamp planner and frame-rate resolver tests.

use framesheet::{DEFAULT_FRAME_RATE, format_timecode, parse_frame_rate, sample_timestamps};

#[test]
fn timestamps_confined_to_interior_ninety_percent() {
    for &(duration, count) in &[(10.0, 8), (100.0, 10), (3600.0, 20), (1.5, 1)] {
        let timestamps = sample_timestamps(duration, count).expect("valid inputs");
        assert_eq!(timestamps.len(), count);

        for &instant in &timestamps {
            assert!(
                instant >= duration * 0.05 && instant < duration * 0.95,
                "timestamp {instant} out of [{}, {}) for duration {duration}",
                duration * 0.05,
                duration * 0.95,
            );
        }
    }
}

#[test]
fn timestamps_strictly_increasing_with_uniform_spacing() {
    let duration = 100.0;
    let count = 10;
    let timestamps = sample_timestamps(duration, count).expect("valid inputs");

    let expected_interval = duration * 0.9 / count as f64;
    for pair in timestamps.windows(2) {
        let spacing = pair[1] - pair[0];
        assert!(pair[1] > pair[0], "timestamps must strictly increase");
        assert!(
            (spacing - expected_interval).abs() < 1e-9,
            "spacing {spacing} differs from expected {expected_interval}"
        );
    }

    assert!((timestamps[0] - 5.0).abs() < 1e-9);
}

#[test]
fn non_positive_duration_rejected() {
    assert!(sample_timestamps(0.0, 8).is_err());
    assert!(sample_timestamps(-3.0, 8).is_err());
}

#[test]
fn zero_frames_rejected() {
    assert!(sample_timestamps(10.0, 0).is_err());
}

#[test]
fn frame_rate_ntsc_rational() {
    let fps = parse_frame_rate("30000/1001");
    assert!((fps - 29.97).abs() < 0.01, "got {fps}");
}

#[test]
fn frame_rate_fallbacks() {
    assert_eq!(parse_frame_rate(""), DEFAULT_FRAME_RATE);
    assert_eq!(parse_frame_rate("30/0"), DEFAULT_FRAME_RATE);
    assert_eq!(parse_frame_rate("notanumber/2"), DEFAULT_FRAME_RATE);
    assert_eq!(parse_frame_rate("25"), DEFAULT_FRAME_RATE);
    assert_eq!(parse_frame_rate("1/2/3"), DEFAULT_FRAME_RATE);
}

#[test]
fn frame_rate_plain_rational() {
    assert_eq!(parse_frame_rate("24/1"), 24.0);
    assert_eq!(parse_frame_rate("50/2"), 25.0);
}

#[test]
fn timecode_formatting() {
    assert_eq!(format_timecode(0.0), "00:00:00");
    assert_eq!(format_timecode(59.6), "00:01:00");
    assert_eq!(format_timecode(75.0), "00:01:15");
    assert_eq!(format_timecode(3661.4), "01:01:01");
    assert_eq!(format_timecode(-5.0), "00:00:00");
}
