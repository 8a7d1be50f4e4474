//! Tests for tracing initialization.

use discord_data::{DiscordDataErrorKind, LoggingConfig, init_tracing};

#[test]
fn test_init_tracing_once_then_rejects_second_install() {
    let config = LoggingConfig {
        filter: "discord_data=debug".to_string(),
        json: false,
    };

    let first = init_tracing(&config);
    assert!(
        first.is_ok(),
        "First initialization should succeed: {:?}",
        first.err()
    );

    let second = init_tracing(&config).expect_err("Global subscriber already set");
    assert!(matches!(second.kind(), DiscordDataErrorKind::Config(_)));
}
