//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables are serialized through a
//! mutex to avoid interference between tests.

use plainsight::config::{load_config, load_config_from_str};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("PLAINSIGHT_SEED");
    std::env::remove_var("PLAINSIGHT_HASH_SEEDING");
    std::env::remove_var("PLAINSIGHT_ENABLE_TYPOS");
    std::env::remove_var("PLAINSIGHT_LOG_LEVEL");
    std::env::remove_var("TEST_PLAINSIGHT_LOG_DIR");
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[seeding]
seed = 42
hash_seeding = false

[typos]
enabled = false
typo_prob = 0.01

[surrogates]
person_name_reuse_prob = 0.25
hospital_city_prob = 0.5

[surrogates.date]
range_start = "2020-01-01"
range_end = "2022-12-31"

[templates.by_tag]
patient_id = "PAT-########"

[pools]
cities = ["Tilburg", "Breda"]

[logging]
level = "debug"
"#;

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{toml_content}").unwrap();

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.seeding.seed, Some(42));
    assert!(!config.seeding.hash_seeding);
    assert!(!config.typos.enabled);
    assert_eq!(config.surrogates.person_name_reuse_prob, 0.25);
    assert_eq!(config.templates.by_tag.get("patient_id").unwrap(), "PAT-########");
    assert_eq!(config.pools.cities, vec!["Tilburg", "Breda"]);
    // Unset sections keep their defaults
    assert!(!config.pools.hospitals.is_empty());
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_env_var_substitution_in_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_PLAINSIGHT_LOG_DIR", "/var/log/plainsight");

    let config = load_config_from_str(
        "[logging]\nfile_enabled = true\nfile_path = \"${TEST_PLAINSIGHT_LOG_DIR}\"\n",
    )
    .unwrap();
    assert_eq!(config.logging.file_path, "/var/log/plainsight");

    cleanup_env_vars();
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PLAINSIGHT_SEED", "9001");
    std::env::set_var("PLAINSIGHT_ENABLE_TYPOS", "false");

    let config = load_config_from_str("[seeding]\nseed = 1\n").unwrap();
    assert_eq!(config.seeding.seed, Some(9001));
    assert!(!config.typos.enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override_is_an_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PLAINSIGHT_SEED", "not-a-number");

    let result = load_config_from_str("");
    assert!(result.is_err());

    cleanup_env_vars();
}

#[test]
fn test_validation_rejects_bad_probability() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let result = load_config_from_str("[surrogates]\nperson_name_reuse_prob = 1.5\n");
    assert!(result.is_err());
}

#[test]
fn test_validation_rejects_inverted_date_range() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let result = load_config_from_str(
        "[surrogates.date]\nrange_start = \"2024-01-01\"\nrange_end = \"2020-01-01\"\n",
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_file_yields_working_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let config = load_config_from_str("").unwrap();
    assert!(config.seeding.hash_seeding);
    assert!(config.typos.enabled);
    assert_eq!(config.typos.typo_prob, 0.002);
    assert!(config.templates.fallback.is_some());
}
