//! Configuration management
//!
//! Configuration is loaded from a TOML file with `${VAR}` substitution and
//! `PLAINSIGHT_*` environment overrides, validated once, then treated as
//! read-only for the lifetime of the engine.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_str};
pub use schema::{
    AgeConfig, DateConfig, HospitalGroup, LimitsConfig, LoggingConfig, PersonNameConfig,
    PlainsightConfig, PoolsConfig, SeedingConfig, SurrogateConfig, TemplateConfig, TimeConfig,
    TypoConfig,
};
