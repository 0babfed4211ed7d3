//! Run command implementation
//!
//! Reads a document, replaces every recognized PHI tag with a generated
//! surrogate and writes the result, optionally together with the replacement
//! mapping as JSON.

use crate::config::{load_config, PlainsightConfig};
use crate::core::Anonymizer;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input text file, or "-" for stdin
    #[arg(short, long)]
    pub input: String,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Write the replacement mapping as JSON to this file
    #[arg(short, long)]
    pub mapping: Option<String>,

    /// Explicit seed for this run, overriding the configuration
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, input = %self.input, "Starting run");

        // A missing config file at the default path means "use defaults";
        // an explicitly pointed-at file must exist.
        let mut config = if !Path::new(config_path).exists() && config_path == "plainsight.toml" {
            PlainsightConfig::default()
        } else {
            match load_config(config_path) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{e}");
                    return Ok(2);
                }
            }
        };

        if let Some(seed) = self.seed {
            config.seeding.seed = Some(seed);
        }

        let engine = match Anonymizer::new(config) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let text = if self.input == "-" {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(&self.input)?
        };

        let result = engine.run(&text)?;

        match &self.output {
            Some(path) => fs::write(path, &result.text)?,
            None => print!("{}", result.text),
        }

        if let Some(path) = &self.mapping {
            let mapping_doc = serde_json::json!({
                "seed": result.seed,
                "seed_source": result.seed_source,
                "replacements": result.mapping,
            });
            fs::write(path, serde_json::to_string_pretty(&mapping_doc)?)?;
        }

        tracing::info!(
            replacements = result.total_replacements(),
            seed = result.seed,
            "Run complete"
        );
        if self.output.is_some() {
            println!(
                "✅ Replaced {} tag(s) (seed {})",
                result.total_replacements(),
                result.seed
            );
        }

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_run_writes_output_and_mapping() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "Patiënt <PERSOON> gezien op <DATUM>.").unwrap();
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.txt");
        let mapping = dir.path().join("mapping.json");

        let args = RunArgs {
            input: input.path().to_string_lossy().to_string(),
            output: Some(output.to_string_lossy().to_string()),
            mapping: Some(mapping.to_string_lossy().to_string()),
            seed: Some(42),
        };

        let code = args.execute("plainsight.toml").unwrap();
        assert_eq!(code, 0);

        let text = fs::read_to_string(&output).unwrap();
        assert!(!text.contains("<PERSOON>"));
        assert!(!text.contains("<DATUM>"));

        let mapping_doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&mapping).unwrap()).unwrap();
        assert_eq!(mapping_doc["seed"], 42);
        assert_eq!(mapping_doc["replacements"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_run_with_missing_explicit_config_is_config_error() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "tekst").unwrap();

        let args = RunArgs {
            input: input.path().to_string_lossy().to_string(),
            output: None,
            mapping: None,
            seed: None,
        };

        let code = args.execute("/nonexistent/custom.toml").unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_run_seed_override_is_reproducible() {
        let mut input = NamedTempFile::new().unwrap();
        write!(input, "<PERSOON> en <ZIEKENHUIS>").unwrap();
        let dir = TempDir::new().unwrap();
        let out_a = dir.path().join("a.txt");
        let out_b = dir.path().join("b.txt");

        for out in [&out_a, &out_b] {
            let args = RunArgs {
                input: input.path().to_string_lossy().to_string(),
                output: Some(out.to_string_lossy().to_string()),
                mapping: None,
                seed: Some(7),
            };
            assert_eq!(args.execute("plainsight.toml").unwrap(), 0);
        }

        assert_eq!(
            fs::read_to_string(&out_a).unwrap(),
            fs::read_to_string(&out_b).unwrap()
        );
    }
}
