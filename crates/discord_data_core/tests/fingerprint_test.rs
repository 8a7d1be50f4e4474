//! Tests for fingerprint construction from raw export fields.

use discord_data_core::Fingerprint;
use serde_json::json;
use std::collections::HashMap;

fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_make_strips_enclosing_quotes() {
    let fingerprint = Fingerprint::make(&raw(&[
        ("os", "\"Windows\""),
        ("os_version", "\"10\""),
        ("browser_user_agent", "\"Mozilla/5.0 (X11; Linux x86_64)\""),
    ]));
    assert_eq!(fingerprint.os().as_deref(), Some("Windows"));
    assert_eq!(fingerprint.os_version().as_deref(), Some("10"));
    assert_eq!(
        fingerprint.browser_user_agent().as_deref(),
        Some("Mozilla/5.0 (X11; Linux x86_64)")
    );
}

#[test]
fn test_make_keeps_unquoted_values() {
    let fingerprint = Fingerprint::make(&raw(&[("ip", "10.0.0.1"), ("isp", "Comcast Cable")]));
    assert_eq!(fingerprint.ip().as_deref(), Some("10.0.0.1"));
    assert_eq!(fingerprint.isp().as_deref(), Some("Comcast Cable"));
}

#[test]
fn test_make_missing_keys_are_absent() {
    let fingerprint = Fingerprint::make(&raw(&[("device", "Pixel 4")]));
    assert_eq!(fingerprint.device().as_deref(), Some("Pixel 4"));
    assert_eq!(*fingerprint.os(), None);
    assert_eq!(*fingerprint.browser(), None);
    assert_eq!(*fingerprint.distro(), None);
}

#[test]
fn test_make_empty_after_stripping_stays_present() {
    let fingerprint = Fingerprint::make(&raw(&[("distro", "\"\""), ("os", "")]));
    assert_eq!(fingerprint.distro().as_deref(), Some(""));
    assert_eq!(fingerprint.os().as_deref(), Some(""));
    assert!(!fingerprint.is_empty());
}

#[test]
fn test_make_leaves_interior_quotes_and_whitespace() {
    let fingerprint = Fingerprint::make(&raw(&[
        ("browser", "\"Chrome \"beta\"\""),
        ("device", " \"tablet\" "),
    ]));
    assert_eq!(fingerprint.browser().as_deref(), Some("Chrome \"beta"));
    assert_eq!(fingerprint.device().as_deref(), Some(" \"tablet\" "));
}

#[test]
fn test_make_ignores_unknown_keys() {
    let fingerprint = Fingerprint::make(&raw(&[("city", "Berlin")]));
    assert!(fingerprint.is_empty());
    assert_eq!(fingerprint, Fingerprint::default());
}

#[test]
fn test_from_json_handles_null_and_scalars() {
    let blob = json!({
        "os": "\"Mac OS X\"",
        "os_version": 14,
        "browser": null,
        "device": true,
    });
    let fingerprint = Fingerprint::from_json(blob.as_object().expect("Object"));
    assert_eq!(fingerprint.os().as_deref(), Some("Mac OS X"));
    assert_eq!(fingerprint.os_version().as_deref(), Some("14"));
    assert_eq!(*fingerprint.browser(), None);
    assert_eq!(fingerprint.device().as_deref(), Some("true"));
    assert_eq!(*fingerprint.ip(), None);
}

#[test]
fn test_builder_sets_only_given_fields() {
    let fingerprint = Fingerprint::builder()
        .os("Linux")
        .distro("Arch")
        .build()
        .expect("All fields optional");
    assert_eq!(fingerprint.os().as_deref(), Some("Linux"));
    assert_eq!(fingerprint.distro().as_deref(), Some("Arch"));
    assert_eq!(*fingerprint.browser(), None);
}
