//! Configuration schema types
//!
//! The configuration is immutable once constructed: the engine borrows it
//! read-only for the lifetime of every run. Overriding a default means
//! constructing a new configuration value, never mutating shared state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main plainsight configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has serde defaults, so an empty file (or
/// `PlainsightConfig::default()`) yields a fully working configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlainsightConfig {
    /// Seeding behavior
    #[serde(default)]
    pub seeding: SeedingConfig,

    /// Surrogate generation knobs
    #[serde(default)]
    pub surrogates: SurrogateConfig,

    /// Typo injection settings
    #[serde(default)]
    pub typos: TypoConfig,

    /// Templates for identifier-shaped tags, keyed by tag label
    #[serde(default)]
    pub templates: TemplateConfig,

    /// Locale data pools
    #[serde(default)]
    pub pools: PoolsConfig,

    /// Optional per-type replacement caps; beyond the cap the original
    /// text is left unchanged
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlainsightConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error message if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.surrogates.validate()?;
        self.typos.validate()?;
        self.templates.validate()?;
        self.pools.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Seeding behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedingConfig {
    /// Explicit seed for fully reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Derive the seed from a hash of the document text when no explicit
    /// seed is given; identical documents then produce identical output
    #[serde(default = "default_true")]
    pub hash_seeding: bool,
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hash_seeding: true,
        }
    }
}

/// Surrogate generation knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrogateConfig {
    /// Probability of reusing a previously drawn person name for a new
    /// original value
    #[serde(default = "default_person_name_reuse_prob")]
    pub person_name_reuse_prob: f64,

    /// Probability of substituting the city form for a hospital name
    #[serde(default = "default_hospital_city_prob")]
    pub hospital_city_prob: f64,

    /// Probability of emitting a pager ("sein") number instead of a phone
    /// number
    #[serde(default = "default_phone_sein_prob")]
    pub phone_sein_prob: f64,

    /// Person name structure and casing probabilities
    #[serde(default)]
    pub person: PersonNameConfig,

    /// Date formatting probabilities and value range
    #[serde(default)]
    pub date: DateConfig,

    /// Time formatting weights
    #[serde(default)]
    pub time: TimeConfig,

    /// Age sampling parameters
    #[serde(default)]
    pub age: AgeConfig,
}

impl Default for SurrogateConfig {
    fn default() -> Self {
        Self {
            person_name_reuse_prob: default_person_name_reuse_prob(),
            hospital_city_prob: default_hospital_city_prob(),
            phone_sein_prob: default_phone_sein_prob(),
            person: PersonNameConfig::default(),
            date: DateConfig::default(),
            time: TimeConfig::default(),
            age: AgeConfig::default(),
        }
    }
}

impl SurrogateConfig {
    fn validate(&self) -> Result<(), String> {
        check_prob("surrogates.person_name_reuse_prob", self.person_name_reuse_prob)?;
        check_prob("surrogates.hospital_city_prob", self.hospital_city_prob)?;
        check_prob("surrogates.phone_sein_prob", self.phone_sein_prob)?;
        self.person.validate()?;
        self.date.validate()?;
        self.time.validate()?;
        self.age.validate()?;
        Ok(())
    }
}

/// Person name structure and casing probabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonNameConfig {
    /// Probability of a first-name-only surrogate
    #[serde(default = "default_first_only_prob")]
    pub first_only_prob: f64,

    /// Probability of a last-name-only surrogate
    #[serde(default = "default_last_only_prob")]
    pub last_only_prob: f64,

    /// Probability of replacing the first name by initials (full names only,
    /// never a lone initial)
    #[serde(default = "default_initials_prob")]
    pub initials_prob: f64,

    /// Maximum number of initials in an initials-style first part
    #[serde(default = "default_max_initials")]
    pub max_initials: usize,

    /// Probability of the "Lastname, First" order
    #[serde(default = "default_reverse_order_prob")]
    pub reverse_order_prob: f64,

    /// Probability of emitting the whole name lowercase
    #[serde(default = "default_lowercase_prob")]
    pub lowercase_prob: f64,

    /// Probability of emitting the whole name uppercase
    #[serde(default = "default_uppercase_prob")]
    pub uppercase_prob: f64,

    /// Probability of a last name carrying a tussenvoegsel particle
    #[serde(default = "default_particle_prob")]
    pub particle_prob: f64,
}

impl Default for PersonNameConfig {
    fn default() -> Self {
        Self {
            first_only_prob: default_first_only_prob(),
            last_only_prob: default_last_only_prob(),
            initials_prob: default_initials_prob(),
            max_initials: default_max_initials(),
            reverse_order_prob: default_reverse_order_prob(),
            lowercase_prob: default_lowercase_prob(),
            uppercase_prob: default_uppercase_prob(),
            particle_prob: default_particle_prob(),
        }
    }
}

impl PersonNameConfig {
    fn validate(&self) -> Result<(), String> {
        check_prob("surrogates.person.first_only_prob", self.first_only_prob)?;
        check_prob("surrogates.person.last_only_prob", self.last_only_prob)?;
        if self.first_only_prob + self.last_only_prob > 1.0 {
            return Err(
                "surrogates.person: first_only_prob + last_only_prob must not exceed 1.0"
                    .to_string(),
            );
        }
        check_prob("surrogates.person.initials_prob", self.initials_prob)?;
        check_prob("surrogates.person.reverse_order_prob", self.reverse_order_prob)?;
        check_prob("surrogates.person.lowercase_prob", self.lowercase_prob)?;
        check_prob("surrogates.person.uppercase_prob", self.uppercase_prob)?;
        if self.lowercase_prob + self.uppercase_prob > 1.0 {
            return Err(
                "surrogates.person: lowercase_prob + uppercase_prob must not exceed 1.0"
                    .to_string(),
            );
        }
        check_prob("surrogates.person.particle_prob", self.particle_prob)?;
        if self.max_initials == 0 {
            return Err("surrogates.person.max_initials must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Date formatting probabilities and value range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateConfig {
    /// First day of the sampled date range (inclusive), ISO format
    #[serde(default = "default_date_range_start")]
    pub range_start: chrono::NaiveDate,

    /// Last day of the sampled date range (inclusive), ISO format
    #[serde(default = "default_date_range_end")]
    pub range_end: chrono::NaiveDate,

    /// Probability of including the year
    #[serde(default = "default_with_year_prob")]
    pub with_year_prob: f64,

    /// Probability of writing the month as a name instead of a number
    #[serde(default = "default_month_as_name_prob")]
    pub month_as_name_prob: f64,

    /// Probability of abbreviating a named month ("feb" vs "februari")
    #[serde(default = "default_month_abbr_prob")]
    pub month_abbr_prob: f64,

    /// Probability of zero-padding numeric day and month (consistently)
    #[serde(default = "default_numeric_padded_prob")]
    pub numeric_padded_prob: f64,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            range_start: default_date_range_start(),
            range_end: default_date_range_end(),
            with_year_prob: default_with_year_prob(),
            month_as_name_prob: default_month_as_name_prob(),
            month_abbr_prob: default_month_abbr_prob(),
            numeric_padded_prob: default_numeric_padded_prob(),
        }
    }
}

impl DateConfig {
    fn validate(&self) -> Result<(), String> {
        if self.range_start > self.range_end {
            return Err(format!(
                "surrogates.date: range_start {} is after range_end {}",
                self.range_start, self.range_end
            ));
        }
        check_prob("surrogates.date.with_year_prob", self.with_year_prob)?;
        check_prob("surrogates.date.month_as_name_prob", self.month_as_name_prob)?;
        check_prob("surrogates.date.month_abbr_prob", self.month_abbr_prob)?;
        check_prob("surrogates.date.numeric_padded_prob", self.numeric_padded_prob)?;
        Ok(())
    }
}

/// Time formatting weights
///
/// The four format weights are relative, not probabilities; they are
/// normalized by the weighted-choice primitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Weight for "13:45"
    #[serde(default = "default_time_colon_weight")]
    pub colon_weight: f64,

    /// Weight for "13.45"
    #[serde(default = "default_time_dot_weight")]
    pub dot_weight: f64,

    /// Weight for "13u45"
    #[serde(default = "default_time_u_weight")]
    pub u_weight: f64,

    /// Weight for natural Dutch phrases ("kwart voor zes")
    #[serde(default = "default_time_natural_weight")]
    pub natural_weight: f64,

    /// Probability of appending " uur" to a numeric time
    #[serde(default = "default_time_uur_prob")]
    pub uur_suffix_prob: f64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            colon_weight: default_time_colon_weight(),
            dot_weight: default_time_dot_weight(),
            u_weight: default_time_u_weight(),
            natural_weight: default_time_natural_weight(),
            uur_suffix_prob: default_time_uur_prob(),
        }
    }
}

impl TimeConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("colon_weight", self.colon_weight),
            ("dot_weight", self.dot_weight),
            ("u_weight", self.u_weight),
            ("natural_weight", self.natural_weight),
        ] {
            if w < 0.0 {
                return Err(format!("surrogates.time.{name} must not be negative"));
            }
        }
        check_prob("surrogates.time.uur_suffix_prob", self.uur_suffix_prob)?;
        Ok(())
    }
}

/// Age sampling parameters: a Gaussian mixture biased toward older adults,
/// clipped to `[min, max]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeConfig {
    /// Component means
    #[serde(default = "default_age_means")]
    pub means: Vec<f64>,

    /// Component variances
    #[serde(default = "default_age_variances")]
    pub variances: Vec<f64>,

    /// Component weights (relative)
    #[serde(default = "default_age_weights")]
    pub weights: Vec<f64>,

    /// Minimum emitted age
    #[serde(default = "default_age_min")]
    pub min: u32,

    /// Maximum emitted age
    #[serde(default = "default_age_max")]
    pub max: u32,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            means: default_age_means(),
            variances: default_age_variances(),
            weights: default_age_weights(),
            min: default_age_min(),
            max: default_age_max(),
        }
    }
}

impl AgeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.means.is_empty()
            || self.means.len() != self.variances.len()
            || self.means.len() != self.weights.len()
        {
            return Err(
                "surrogates.age: means, variances and weights must be non-empty and equal length"
                    .to_string(),
            );
        }
        if self.variances.iter().any(|v| *v <= 0.0) {
            return Err("surrogates.age: variances must be positive".to_string());
        }
        if self.weights.iter().any(|w| *w < 0.0) {
            return Err("surrogates.age: weights must not be negative".to_string());
        }
        if self.min > self.max {
            return Err(format!(
                "surrogates.age: min {} exceeds max {}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Typo injection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypoConfig {
    /// Enable random typos in perturbable surrogates
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Per-surrogate probability of receiving a typo
    #[serde(default = "default_typo_prob")]
    pub typo_prob: f64,

    /// Relative weight of adjacent-key substitution
    #[serde(default = "default_typo_weight")]
    pub substitution_weight: f64,

    /// Relative weight of character insertion
    #[serde(default = "default_typo_weight")]
    pub insertion_weight: f64,

    /// Relative weight of character deletion
    #[serde(default = "default_typo_weight")]
    pub deletion_weight: f64,
}

impl Default for TypoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            typo_prob: default_typo_prob(),
            substitution_weight: default_typo_weight(),
            insertion_weight: default_typo_weight(),
            deletion_weight: default_typo_weight(),
        }
    }
}

impl TypoConfig {
    fn validate(&self) -> Result<(), String> {
        check_prob("typos.typo_prob", self.typo_prob)?;
        for (name, w) in [
            ("substitution_weight", self.substitution_weight),
            ("insertion_weight", self.insertion_weight),
            ("deletion_weight", self.deletion_weight),
        ] {
            if w < 0.0 {
                return Err(format!("typos.{name} must not be negative"));
            }
        }
        if self.enabled
            && self.substitution_weight + self.insertion_weight + self.deletion_weight <= 0.0
        {
            return Err("typos: at least one edit weight must be positive".to_string());
        }
        Ok(())
    }
}

/// Templates for identifier-shaped tags
///
/// Template symbols: `#` digit, `A` uppercase letter, `a` lowercase letter,
/// `X` alphanumeric, anything else literal. There is no escaping mechanism;
/// choose templates that avoid the symbol characters as literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template per tag label ("patient_id", "z_number", ...)
    #[serde(default = "default_id_templates")]
    pub by_tag: HashMap<String, String>,

    /// Fallback template for identifier tags without an explicit entry.
    /// Setting this to none makes an unmapped identifier tag a
    /// configuration error.
    #[serde(default = "default_fallback_template")]
    pub fallback: Option<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            by_tag: default_id_templates(),
            fallback: default_fallback_template(),
        }
    }
}

impl TemplateConfig {
    fn validate(&self) -> Result<(), String> {
        for (tag, template) in &self.by_tag {
            if template.is_empty() {
                return Err(format!("templates.by_tag.{tag} must not be empty"));
            }
        }
        if let Some(fallback) = &self.fallback {
            if fallback.is_empty() {
                return Err("templates.fallback must not be empty".to_string());
            }
        }
        Ok(())
    }
}

/// A group of synonymous hospital names with their city form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HospitalGroup {
    /// Formal name variants ("Sint Elisabeth Ziekenhuis", "St. Elisabeth")
    pub names: Vec<String>,
    /// City form that may be substituted for the formal name
    pub city: String,
}

/// Locale data pools
///
/// Pools are ordered sequences of synonym groups; a generator first picks a
/// group, then a variant within it. Defaults come from the built-in Dutch
/// tables; overriding a pool replaces it entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolsConfig {
    /// Hospital synonym groups
    #[serde(default = "crate::generators::pools::default_hospital_groups")]
    pub hospitals: Vec<HospitalGroup>,

    /// Study name synonym groups
    #[serde(default = "crate::generators::pools::default_study_groups")]
    pub studies: Vec<Vec<String>>,

    /// City names for location surrogates
    #[serde(default = "crate::generators::pools::default_cities")]
    pub cities: Vec<String>,
}

impl Default for PoolsConfig {
    fn default() -> Self {
        Self {
            hospitals: crate::generators::pools::default_hospital_groups(),
            studies: crate::generators::pools::default_study_groups(),
            cities: crate::generators::pools::default_cities(),
        }
    }
}

impl PoolsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.hospitals.is_empty() {
            return Err("pools.hospitals must not be empty".to_string());
        }
        if self.hospitals.iter().any(|g| g.names.is_empty()) {
            return Err("pools.hospitals: every group needs at least one name".to_string());
        }
        if self.studies.is_empty() || self.studies.iter().any(|g| g.is_empty()) {
            return Err("pools.studies must contain non-empty groups".to_string());
        }
        if self.cities.is_empty() {
            return Err("pools.cities must not be empty".to_string());
        }
        Ok(())
    }
}

/// Optional per-type replacement caps, keyed by tag label
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum replacements per PHI type per document; occurrences beyond
    /// the cap keep their original text and produce no mapping entry
    #[serde(default)]
    pub max_per_type: HashMap<String, usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub file_path: String,

    /// File rotation: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: false,
            file_path: default_log_path(),
            rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.as_str()) {
            return Err(format!(
                "Invalid logging.level '{}'. Must be one of: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        if !["daily", "hourly"].contains(&self.rotation.as_str()) {
            return Err(format!(
                "Invalid logging.rotation '{}'. Must be 'daily' or 'hourly'",
                self.rotation
            ));
        }
        Ok(())
    }
}

fn check_prob(name: &str, value: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{name} must be in [0, 1], got {value}"));
    }
    Ok(())
}

fn default_true() -> bool {
    true
}

fn default_person_name_reuse_prob() -> f64 {
    0.15
}

fn default_hospital_city_prob() -> f64 {
    0.3
}

fn default_phone_sein_prob() -> f64 {
    0.1
}

fn default_first_only_prob() -> f64 {
    0.15
}

fn default_last_only_prob() -> f64 {
    0.2
}

fn default_initials_prob() -> f64 {
    0.2
}

fn default_max_initials() -> usize {
    3
}

fn default_reverse_order_prob() -> f64 {
    0.1
}

fn default_lowercase_prob() -> f64 {
    0.05
}

fn default_uppercase_prob() -> f64 {
    0.05
}

fn default_particle_prob() -> f64 {
    0.35
}

fn default_date_range_start() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid default date")
}

fn default_date_range_end() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid default date")
}

fn default_with_year_prob() -> f64 {
    0.5
}

fn default_month_as_name_prob() -> f64 {
    0.4
}

fn default_month_abbr_prob() -> f64 {
    0.3
}

fn default_numeric_padded_prob() -> f64 {
    0.5
}

fn default_time_colon_weight() -> f64 {
    0.45
}

fn default_time_dot_weight() -> f64 {
    0.2
}

fn default_time_u_weight() -> f64 {
    0.15
}

fn default_time_natural_weight() -> f64 {
    0.2
}

fn default_time_uur_prob() -> f64 {
    0.3
}

fn default_age_means() -> Vec<f64> {
    vec![38.0, 72.0]
}

fn default_age_variances() -> Vec<f64> {
    vec![170.0, 95.0]
}

fn default_age_weights() -> Vec<f64> {
    vec![0.35, 0.65]
}

fn default_age_min() -> u32 {
    18
}

fn default_age_max() -> u32 {
    98
}

fn default_typo_prob() -> f64 {
    0.002
}

fn default_typo_weight() -> f64 {
    1.0
}

fn default_id_templates() -> HashMap<String, String> {
    let mut templates = HashMap::new();
    templates.insert("patient_id".to_string(), "PAT-######".to_string());
    templates.insert("z_number".to_string(), "Z-#######".to_string());
    templates.insert("document_id".to_string(), "DOC-######".to_string());
    templates.insert("phi_number".to_string(), "PHI-######".to_string());
    templates
}

fn default_fallback_template() -> Option<String> {
    Some("ID-######".to_string())
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlainsightConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.seeding.hash_seeding);
        assert!(config.seeding.seed.is_none());
        assert!(config.typos.enabled);
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let config: PlainsightConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.templates.by_tag.get("z_number").unwrap(), "Z-#######");
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        let mut config = PlainsightConfig::default();
        config.surrogates.person_name_reuse_prob = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let mut config = PlainsightConfig::default();
        config.surrogates.date.range_start =
            chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        config.surrogates.date.range_end = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pool_rejected() {
        let mut config = PlainsightConfig::default();
        config.pools.cities.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_age_mixture_length_mismatch_rejected() {
        let mut config = PlainsightConfig::default();
        config.surrogates.age.weights = vec![1.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_section_parsing() {
        let toml_src = r#"
            [seeding]
            seed = 42
            hash_seeding = false

            [typos]
            enabled = false

            [surrogates.date]
            range_start = "2020-06-01"
            range_end = "2021-06-01"
        "#;
        let config: PlainsightConfig = toml::from_str(toml_src).unwrap();
        assert_eq!(config.seeding.seed, Some(42));
        assert!(!config.seeding.hash_seeding);
        assert!(!config.typos.enabled);
        assert_eq!(
            config.surrogates.date.range_start,
            chrono::NaiveDate::from_ymd_opt(2020, 6, 1).unwrap()
        );
    }
}
