//! Anonymization engine
//!
//! Ties the pipeline together: seed derivation, tag scanning, surrogate
//! generation with per-run consistency, optional typo injection, and
//! assembly of the output text with its replacement mapping. A run is
//! all-or-nothing: any generation failure surfaces as an error and no
//! partial document is returned.

use crate::config::PlainsightConfig;
use crate::core::registry::{RegistryKey, SurrogateRegistry};
use crate::core::scanner::TagScanner;
use crate::core::seed::SeedManager;
use crate::core::template::TemplateEngine;
use crate::core::typo::TypoInjector;
use crate::domain::errors::PlainsightError;
use crate::domain::phi::{AnonymizedDocument, PhiType, SurrogateRecord};
use crate::domain::result::Result;
use crate::generators::{generate, GeneratorContext};
use std::collections::HashMap;
use tracing::{debug, info};

/// The anonymization engine
///
/// Construction validates the configuration and compiles the scanner and
/// templates once; [`Anonymizer::run`] can then be called for any number of
/// documents. Each run gets a fresh random source and a fresh surrogate
/// registry, so documents never influence each other.
pub struct Anonymizer {
    config: PlainsightConfig,
    scanner: TagScanner,
    templates: TemplateEngine,
    seeds: SeedManager,
    typos: TypoInjector,
}

impl Anonymizer {
    /// Build an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when validation fails and a scan error
    /// when a tag pattern does not compile.
    pub fn new(config: PlainsightConfig) -> Result<Self> {
        config.validate().map_err(PlainsightError::Configuration)?;

        let scanner = TagScanner::with_default_patterns()?;
        let templates = TemplateEngine::new(
            &config.templates.by_tag,
            config.templates.fallback.as_deref(),
        );
        let seeds = SeedManager::new(config.seeding.seed, config.seeding.hash_seeding);
        let typos = TypoInjector::from_config(&config.typos);

        Ok(Self {
            config,
            scanner,
            templates,
            seeds,
            typos,
        })
    }

    /// Anonymize one document
    ///
    /// Replaces every recognized tag with a generated surrogate. Repeated
    /// occurrences of the same original text with the same type receive the
    /// same surrogate within this run. Unrecognized bracket tokens pass
    /// through untouched. Mapping offsets point into the returned text.
    ///
    /// # Errors
    ///
    /// Any generator failure aborts the whole run; no partially replaced
    /// text is ever returned.
    pub fn run(&self, text: &str) -> Result<AnonymizedDocument> {
        let (rng, seed, seed_source) = self.seeds.rng_for(text);
        let tags = self.scanner.scan(text);
        debug!(tags = tags.len(), ?seed_source, "scanned document");

        let mut ctx = GeneratorContext::new(
            rng,
            &self.config.surrogates,
            &self.config.pools,
            &self.templates,
        );
        let mut registry = SurrogateRegistry::new();
        let mut replaced_per_type: HashMap<PhiType, usize> = HashMap::new();

        let mut output = String::with_capacity(text.len());
        let mut mapping: Vec<SurrogateRecord> = Vec::with_capacity(tags.len());
        let mut cursor = 0usize;

        for tag in &tags {
            // Over-cap occurrences keep their original text and produce no
            // mapping entry; the untouched span is copied with the next
            // segment because the cursor stays put.
            if let Some(cap) = self.config.limits.max_per_type.get(tag.phi_type.label()) {
                let seen = replaced_per_type.entry(tag.phi_type).or_insert(0);
                if *seen >= *cap {
                    continue;
                }
            }

            output.push_str(&text[cursor..tag.start]);

            let key = RegistryKey::new(&tag.raw, tag.phi_type);
            let typos = &self.typos;
            let surrogate = registry.resolve(key, || {
                let value = generate(tag, &mut ctx)?;
                // Typos are applied inside the producer so every repeat of
                // the same original carries the identical perturbed form.
                if tag.phi_type.is_perturbable() {
                    Ok(typos.maybe_perturb(&value, &mut ctx.rng))
                } else {
                    Ok(value)
                }
            })?;

            let start = output.len();
            output.push_str(&surrogate);
            mapping.push(SurrogateRecord {
                original: tag.raw.clone(),
                surrogate,
                phi_type: tag.phi_type,
                start,
                end: output.len(),
            });
            *replaced_per_type.entry(tag.phi_type).or_insert(0) += 1;
            cursor = tag.end;
        }
        output.push_str(&text[cursor..]);

        info!(
            replacements = mapping.len(),
            distinct = registry.len(),
            ?seed_source,
            "document anonymized"
        );

        Ok(AnonymizedDocument {
            text: output,
            mapping,
            seed,
            seed_source,
        })
    }
}
