//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PlainsightConfig;
use crate::domain::errors::PlainsightError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`PlainsightConfig`]
/// 4. Applies environment variable overrides (`PLAINSIGHT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is not set, or validation fails.
pub fn load_config(path: impl AsRef<Path>) -> Result<PlainsightConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PlainsightError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PlainsightError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML content
pub fn load_config_from_str(contents: &str) -> Result<PlainsightConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: PlainsightConfig = toml::from_str(&contents)
        .map_err(|e| PlainsightError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(PlainsightError::Configuration)?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched. A referenced but unset variable is an
/// error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex");
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PlainsightError::Configuration(format!(
            "Missing environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies `PLAINSIGHT_*` environment variable overrides
fn apply_env_overrides(config: &mut PlainsightConfig) -> Result<()> {
    if let Ok(val) = std::env::var("PLAINSIGHT_SEED") {
        let seed = val.parse().map_err(|_| {
            PlainsightError::Configuration(format!("Invalid PLAINSIGHT_SEED value: {val}"))
        })?;
        config.seeding.seed = Some(seed);
    }

    if let Ok(val) = std::env::var("PLAINSIGHT_HASH_SEEDING") {
        config.seeding.hash_seeding = val.parse().map_err(|_| {
            PlainsightError::Configuration(format!("Invalid PLAINSIGHT_HASH_SEEDING value: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("PLAINSIGHT_ENABLE_TYPOS") {
        config.typos.enabled = val.parse().map_err(|_| {
            PlainsightError::Configuration(format!("Invalid PLAINSIGHT_ENABLE_TYPOS value: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("PLAINSIGHT_LOG_LEVEL") {
        config.logging.level = val;
    }

    Ok(())
}
