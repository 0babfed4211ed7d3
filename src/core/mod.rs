//! Core anonymization pipeline
//!
//! Scanning, seeding, templating, per-run consistency and typo injection,
//! assembled by the engine.

pub mod engine;
pub mod registry;
pub mod scanner;
pub mod seed;
pub mod template;
pub mod typo;

pub use engine::Anonymizer;
pub use registry::{RegistryKey, SurrogateRegistry};
pub use scanner::{TagMatch, TagPattern, TagScanner};
pub use seed::SeedManager;
pub use template::{Template, TemplateEngine};
pub use typo::TypoInjector;
