//! Tests for export timestamp parsing and rendering.

use chrono::{NaiveDate, TimeZone, Utc};
use discord_data_core::Timestamp;
use discord_data_error::{DiscordDataErrorKind, ParseErrorKind};

#[test]
fn test_accepted_formats() {
    let cases = [
        ("2021-01-01T00:00:00.000Z", "2021-01-01T00:00:00+00:00", false),
        ("2021-01-01T02:00:00+02:00", "2021-01-01T02:00:00+02:00", false),
        ("2020-06-14 02:35:55.123000+00:00", "2020-06-14T02:35:55.123+00:00", false),
        ("2020-06-14 02:35:55+00:00", "2020-06-14T02:35:55+00:00", false),
        ("2020-06-14T02:35:55", "2020-06-14T02:35:55", true),
        ("2020-06-14 02:35:55.5", "2020-06-14T02:35:55.500", true),
        ("\"2021-01-01T00:00:00Z\"", "2021-01-01T00:00:00+00:00", false),
    ];

    for (raw, expected, naive) in cases {
        let ts = Timestamp::parse(raw).unwrap_or_else(|e| panic!("{} should parse: {}", raw, e));
        assert_eq!(ts.to_iso8601(), expected, "rendering of {}", raw);
        assert_eq!(ts.is_naive(), naive, "naive state of {}", raw);
    }
}

#[test]
fn test_rejects_garbage() {
    for raw in ["", "yesterday", "2021-13-01T00:00:00Z", "1609459200"] {
        let err = Timestamp::parse(raw).expect_err("Should not parse");
        match err.kind() {
            DiscordDataErrorKind::Parse(e) => {
                assert_eq!(e.kind, ParseErrorKind::InvalidTimestamp(raw.to_string()))
            }
            other => panic!("Expected parse error, got {}", other),
        }
    }
}

#[test]
fn test_offset_is_preserved_not_normalized() {
    let ts = Timestamp::parse("2021-01-01T05:30:00+05:30").expect("Valid timestamp");
    assert_eq!(ts.to_string(), "2021-01-01T05:30:00+05:30");
}

#[test]
fn test_from_chrono_values() {
    let naive = NaiveDate::from_ymd_opt(2019, 2, 3)
        .expect("Valid date")
        .and_hms_opt(4, 5, 6)
        .expect("Valid time");
    assert_eq!(Timestamp::from(naive), Timestamp::Naive(naive));

    let utc = Utc.with_ymd_and_hms(2019, 2, 3, 4, 5, 6).unwrap();
    assert_eq!(Timestamp::from(utc).to_iso8601(), "2019-02-03T04:05:06+00:00");
}

#[test]
fn test_serde_keeps_variant() {
    for raw in ["2020-06-14T02:35:55", "2020-06-14T02:35:55-07:00"] {
        let ts = Timestamp::parse(raw).expect("Valid timestamp");
        let json = serde_json::to_string(&ts).expect("Serializable");
        assert_eq!(json, format!("\"{}\"", raw));
        let back: Timestamp = serde_json::from_str(&json).expect("Deserializable");
        assert_eq!(back, ts);
        assert_eq!(back.is_naive(), ts.is_naive());
    }
}
