//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the plainsight configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config performs env substitution, parsing and validation
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        match config.seeding.seed {
            Some(seed) => println!("  Seed: {seed} (explicit)"),
            None if config.seeding.hash_seeding => println!("  Seed: derived from document hash"),
            None => println!("  Seed: system entropy (not reproducible)"),
        }
        println!("  Typos: {}", if config.typos.enabled { "enabled" } else { "disabled" });
        if config.typos.enabled {
            println!("  Typo Probability: {}", config.typos.typo_prob);
        }
        println!("  Templates: {} tag(s)", config.templates.by_tag.len());
        match &config.templates.fallback {
            Some(fallback) => println!("  Fallback Template: {fallback}"),
            None => println!("  Fallback Template: none (unmapped identifier tags will fail)"),
        }
        println!("  Hospital Groups: {}", config.pools.hospitals.len());
        println!("  Study Groups: {}", config.pools.studies.len());
        println!("  Cities: {}", config.pools.cities.len());
        println!(
            "  Date Range: {} .. {}",
            config.surrogates.date.range_start, config.surrogates.date.range_end
        );
        if !config.limits.max_per_type.is_empty() {
            println!("  Per-Type Caps: {:?}", config.limits.max_per_type);
        }
        println!("  Log Level: {}", config.logging.level);
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[seeding]\nseed = 1").unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&file.path().to_string_lossy())
            .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_validate_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[typos]\ntypo_prob = 5.0").unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&file.path().to_string_lossy())
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/plainsight.toml").unwrap();
        assert_eq!(code, 2);
    }
}
