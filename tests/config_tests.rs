use std::env;

use hackreg::config::Config;
use pretty_assertions::assert_eq;
use serial_test::serial;

mod common;

const VARS: [&str; 7] = [
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGIN",
    "SEED_SAMPLE_DATA",
];

fn with_env<F: FnOnce()>(values: &[(&str, &str)], f: F) {
    let original: Vec<(&str, Option<String>)> =
        VARS.iter().map(|key| (*key, env::var(key).ok())).collect();

    unsafe {
        for key in VARS {
            env::remove_var(key);
        }
        for (key, value) in values {
            env::set_var(key, value);
        }
    }

    f();

    unsafe {
        for (key, value) in original {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }
}

#[test]
#[serial]
fn test_config_defaults() {
    common::setup_test_env();

    with_env(&[], || {
        let config = Config::from_env_only().unwrap();

        assert_eq!(config.database_url, "sqlite:./hackathon.db");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.cors_allowed_origin, None);
        assert!(!config.seed_sample_data);
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.server_address(), "127.0.0.1:3000");
    });
}

#[test]
#[serial]
fn test_config_custom_values() {
    common::setup_test_env();

    with_env(
        &[
            ("DATABASE_URL", "sqlite:./custom.db"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8081"),
            ("ENVIRONMENT", "production"),
            ("CORS_ALLOWED_ORIGIN", "https://hack.example.com"),
            ("SEED_SAMPLE_DATA", "true"),
        ],
        || {
            let config = Config::from_env_only().unwrap();

            assert_eq!(config.database_url, "sqlite:./custom.db");
            assert_eq!(config.database_max_connections, 4);
            assert_eq!(config.server_address(), "0.0.0.0:8081");
            assert!(config.is_production());
            assert_eq!(
                config.cors_allowed_origin.as_deref(),
                Some("https://hack.example.com")
            );
            assert!(config.seed_sample_data);
        },
    );
}

#[test]
#[serial]
fn test_config_invalid_numbers_fall_back_to_defaults() {
    common::setup_test_env();

    with_env(
        &[
            ("PORT", "not-a-port"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
            ("CORS_ALLOWED_ORIGIN", "  "),
            ("SEED_SAMPLE_DATA", "nope"),
        ],
        || {
            let config = Config::from_env_only().unwrap();

            assert_eq!(config.port, 3000);
            assert_eq!(config.database_max_connections, 10);
            assert_eq!(config.cors_allowed_origin, None);
            assert!(!config.seed_sample_data);
        },
    );
}
