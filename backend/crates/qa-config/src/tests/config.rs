use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_loaded_then_defaults_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.host.as_str(), eq("127.0.0.1"));
    assert_that!(config.server.port, eq(5000));
    assert_that!(config.database.path.as_str(), eq("data.db"));
    assert_that!(config.auth.hash_cost, eq(10));
    assert_that!(config.handler.timeout_secs, eq(30));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_config_toml_when_loaded_then_file_values_apply() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 8080

            [auth]
            hash_cost = 12
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8080));
    assert_that!(config.auth.hash_cost, eq(12));
    // Untouched sections keep their defaults
    assert_that!(config.database.path.as_str(), eq("data.db"));
}

#[test]
#[serial]
fn given_env_override_when_loaded_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 8080\n").unwrap();
    let _port = EnvGuard::set("QA_SERVER_PORT", "9090");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9090));
}

#[test]
#[serial]
fn given_config_dir_env_var_when_resolved_then_it_is_used() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir, eq(&temp.path().to_path_buf()));
}

#[test]
#[serial]
fn given_database_path_when_resolved_then_relative_to_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("data.db")));
}
