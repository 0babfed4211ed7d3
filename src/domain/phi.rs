//! PHI type and surrogate record models

use serde::{Deserialize, Serialize};

/// PHI category enumeration covering the tag types recognized in Dutch
/// medical reports.
///
/// Every tag pattern resolves to exactly one variant, and every variant has
/// a generator. Adding a new PHI type is a compile-time-checked extension:
/// the dispatch match in [`crate::generators`] must cover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhiType {
    /// Person names (full, first-only, last-only, initials + last)
    PersonName,
    /// Bare initials like "A.B."
    PersonInitials,
    /// Age in years
    Age,
    /// Calendar dates in Dutch formats
    Date,
    /// Clock times, numeric or natural-language Dutch
    Time,
    /// Telephone numbers, including hospital pager ("sein") numbers
    PhoneNumber,
    /// Email addresses
    Email,
    /// Web URLs
    Url,
    /// Single-line street addresses
    Address,
    /// City / place names
    Location,
    /// Hospital names (formal name or city form)
    HospitalName,
    /// Clinical study / trial names
    StudyName,
    /// Dutch citizen service number (burgerservicenummer)
    Bsn,
    /// Dutch bank account number
    Iban,
    /// Laboratory accreditation number (M + three digits)
    AccreditationNumber,
    /// Patient identifier (templated)
    PatientId,
    /// Employee Z-number (templated)
    ZNumber,
    /// Report / document identifier (templated)
    DocumentId,
    /// Report sub-identifier carrying a subtype (T/R/C/DPA/RPA)
    DocumentSubId,
    /// Generic PHI number (templated)
    PhiNumber,
}

impl PhiType {
    /// Stable snake_case label, used as mapping output and template lookup key
    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonName => "person_name",
            Self::PersonInitials => "person_initials",
            Self::Age => "age",
            Self::Date => "date",
            Self::Time => "time",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
            Self::Url => "url",
            Self::Address => "address",
            Self::Location => "location",
            Self::HospitalName => "hospital_name",
            Self::StudyName => "study_name",
            Self::Bsn => "bsn",
            Self::Iban => "iban",
            Self::AccreditationNumber => "accreditation_number",
            Self::PatientId => "patient_id",
            Self::ZNumber => "z_number",
            Self::DocumentId => "document_id",
            Self::DocumentSubId => "document_sub_id",
            Self::PhiNumber => "phi_number",
        }
    }

    /// Whether surrogates of this type may receive a random typo.
    ///
    /// Only free-text-like surrogates are perturbable; a typo in a
    /// structured field (IBAN, BSN, identifiers, dates) would break its
    /// format validity.
    pub fn is_perturbable(&self) -> bool {
        matches!(
            self,
            Self::PersonName
                | Self::HospitalName
                | Self::StudyName
                | Self::Location
                | Self::Address
        )
    }
}

/// One replacement performed during a run.
///
/// `start` and `end` are byte offsets into the *output* text, always on
/// UTF-8 character boundaries, such that `text[start..end] == surrogate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurrogateRecord {
    /// Exact matched substring from the source text
    pub original: String,
    /// Generated replacement string
    pub surrogate: String,
    /// PHI category of the tag
    pub phi_type: PhiType,
    /// Start offset in the output text
    pub start: usize,
    /// End offset in the output text
    pub end: usize,
}

/// How the run's seed was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// Explicitly supplied seed
    Explicit,
    /// Derived from a hash of the document text
    DocumentHash,
    /// Drawn from system entropy (not reproducible)
    Entropy,
}

/// Result of one anonymization run
#[derive(Debug, Clone, Serialize)]
pub struct AnonymizedDocument {
    /// Output text with all recognized tags replaced
    pub text: String,
    /// Replacement records in source order of first occurrence
    pub mapping: Vec<SurrogateRecord>,
    /// Seed that drove the run, for reproduction
    pub seed: u64,
    /// How the seed was obtained
    pub seed_source: SeedSource,
}

impl AnonymizedDocument {
    /// Total number of replacements performed
    pub fn total_replacements(&self) -> usize {
        self.mapping.len()
    }

    /// Check if any tag was replaced
    pub fn has_replacements(&self) -> bool {
        !self.mapping.is_empty()
    }
}
