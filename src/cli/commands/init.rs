//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "plainsight.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: plainsight validate-config");
                println!("  3. Anonymize a document: plainsight run --input report.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with the built-in defaults spelled out
    fn sample_config() -> String {
        r#"# plainsight configuration file
# PHI surrogate substitution for Dutch medical text
#
# Every setting is optional; omitted sections fall back to these defaults.

[seeding]
# Explicit seed for fully reproducible runs. When unset, the seed is derived
# from a hash of the document text (hash_seeding = true) or from system
# entropy (hash_seeding = false).
# seed = 42
hash_seeding = true

[typos]
enabled = true
typo_prob = 0.002
substitution_weight = 1.0
insertion_weight = 1.0
deletion_weight = 1.0

[surrogates]
person_name_reuse_prob = 0.15
hospital_city_prob = 0.3
phone_sein_prob = 0.1

[surrogates.person]
first_only_prob = 0.15
last_only_prob = 0.2
initials_prob = 0.2
max_initials = 3
reverse_order_prob = 0.1
lowercase_prob = 0.05
uppercase_prob = 0.05
particle_prob = 0.35

[surrogates.date]
range_start = "2019-01-01"
range_end = "2024-12-31"
with_year_prob = 0.5
month_as_name_prob = 0.4
month_abbr_prob = 0.3
numeric_padded_prob = 0.5

[surrogates.time]
colon_weight = 0.45
dot_weight = 0.2
u_weight = 0.15
natural_weight = 0.2
uur_suffix_prob = 0.3

[surrogates.age]
means = [38.0, 72.0]
variances = [170.0, 95.0]
weights = [0.35, 0.65]
min = 18
max = 98

[templates]
# Template symbols: '#' digit, 'A' uppercase, 'a' lowercase, 'X' alphanumeric.
fallback = "ID-######"

[templates.by_tag]
patient_id = "PAT-######"
z_number = "Z-#######"
document_id = "DOC-######"
phi_number = "PHI-######"

[limits]
# Per-type replacement caps; occurrences beyond the cap keep their original
# text. Uncomment to enable.
# [limits.max_per_type]
# person_name = 50

[logging]
level = "info"
file_enabled = false
file_path = "./logs"
rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plainsight.toml");

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 0);

        let config = load_config(&path).unwrap();
        assert!(config.seeding.hash_seeding);
        assert_eq!(config.templates.by_tag.get("z_number").unwrap(), "Z-#######");
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plainsight.toml");
        fs::write(&path, "bestaand").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "bestaand");
    }

    #[test]
    fn test_init_overwrites_with_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("plainsight.toml");
        fs::write(&path, "bestaand").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().unwrap(), 0);
        assert_ne!(fs::read_to_string(&path).unwrap(), "bestaand");
    }
}
