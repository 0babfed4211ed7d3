// plainsight - PHI surrogate substitution for Dutch medical text
// Copyright (c) 2025 plainsight Contributors
// Licensed under the MIT License

//! # plainsight - PHI surrogate substitution for Dutch medical text
//!
//! plainsight replaces placeholder PHI tags (`<PERSOON>`, `<DATUM>`,
//! `<BSN>`, ...) in Dutch medical reports with realistic fabricated
//! surrogates, hiding the removed information in plain sight instead of
//! leaving conspicuous redaction markers.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Scanning** text for recognized PHI tags, including dotted
//!   hierarchical report identifiers
//! - **Generating** Dutch-locale surrogates per PHI type (names, dates,
//!   hospitals, BSN/IBAN with valid checksums, templated identifiers)
//! - **Reproducing** runs bit-for-bit via explicit or document-hash seeding
//! - **Mapping** every replacement back to its source tag with byte offsets
//!   into the output text
//!
//! ## Architecture
//!
//! plainsight follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Scanning, seeding, templating, consistency, assembly
//! - [`generators`] - Per-PHI-type surrogate generators and locale pools
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use plainsight::config::PlainsightConfig;
//! use plainsight::core::Anonymizer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = PlainsightConfig::default();
//! config.seeding.seed = Some(42);
//!
//! let engine = Anonymizer::new(config)?;
//! let result = engine.run("Patiënt <PERSOON> gezien op <DATUM>.")?;
//!
//! assert!(!result.text.contains("<PERSOON>"));
//! assert_eq!(result.total_replacements(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Consistency
//!
//! Within one run, every occurrence of the same original text with the same
//! tag type receives the same surrogate. Repeated runs over the same
//! document are identical under an explicit seed or document-hash seeding
//! (the default).
//!
//! ## Error Handling
//!
//! plainsight uses the [`domain::errors::PlainsightError`] type for all
//! errors. A run is all-or-nothing: any generation failure surfaces as an
//! error and no partially replaced text is returned.
//!
//! ## Logging
//!
//! plainsight uses structured logging with the `tracing` crate. Log events
//! carry counts and seed provenance, never document text or surrogates.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod generators;
pub mod logging;
