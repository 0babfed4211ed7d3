//! Tag scanner
//!
//! Builds the set of recognized tag patterns and produces an ordered,
//! non-overlapping sequence of matches over the input text. Scanning is a
//! pure function of the text and the pattern set.

use crate::domain::errors::PlainsightError;
use crate::domain::phi::PhiType;
use crate::domain::result::Result;
use regex::Regex;

/// A tag pattern definition: a PHI type and the regex matching its tags
#[derive(Debug, Clone)]
pub struct TagPattern {
    /// PHI category the pattern resolves to
    pub phi_type: PhiType,
    /// Regex source, e.g. `r"<(?:PERSOON|NAAM)>"`. An optional first capture
    /// group carries the subtype of a dotted hierarchical tag.
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(phi_type: PhiType, pattern: impl Into<String>) -> Self {
        Self {
            phi_type,
            pattern: pattern.into(),
        }
    }
}

/// A located tag in the source text
///
/// Offsets are byte offsets into the source text, non-overlapping and
/// ordered by start offset. Matches are produced fresh per scan and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// PHI category of the matched tag
    pub phi_type: PhiType,
    /// Subtype of a dotted hierarchical tag (first capture group), if any
    pub sub_type: Option<String>,
    /// Start byte offset in the source text
    pub start: usize,
    /// End byte offset in the source text
    pub end: usize,
    /// Exact matched substring
    pub raw: String,
}

struct CompiledTagPattern {
    phi_type: PhiType,
    regex: Regex,
}

/// Scanner over the registered tag patterns
///
/// Construction compiles every pattern and rejects duplicate pattern strings
/// registered for different PHI types. When two patterns could match at the
/// same start offset, the longer match wins; on equal length the pattern
/// registered first wins.
pub struct TagScanner {
    patterns: Vec<CompiledTagPattern>,
}

impl TagScanner {
    /// Compile a scanner from explicit pattern definitions
    ///
    /// # Errors
    ///
    /// Returns a scan error when a regex fails to compile or when the same
    /// pattern string is registered for more than one PHI type.
    pub fn new(definitions: Vec<TagPattern>) -> Result<Self> {
        let mut seen: Vec<(&str, PhiType)> = Vec::new();
        for def in &definitions {
            if let Some((_, owner)) = seen.iter().find(|(p, _)| *p == def.pattern) {
                if *owner != def.phi_type {
                    return Err(PlainsightError::Scan(format!(
                        "Pattern {:?} registered for both {} and {}",
                        def.pattern,
                        owner.label(),
                        def.phi_type.label()
                    )));
                }
            }
            seen.push((&def.pattern, def.phi_type));
        }

        let mut patterns = Vec::with_capacity(definitions.len());
        for def in &definitions {
            let regex = Regex::new(&def.pattern).map_err(|e| {
                PlainsightError::Scan(format!("Invalid pattern {:?}: {e}", def.pattern))
            })?;
            patterns.push(CompiledTagPattern {
                phi_type: def.phi_type,
                regex,
            });
        }

        Ok(Self { patterns })
    }

    /// Compile a scanner with the built-in tag pattern set
    pub fn with_default_patterns() -> Result<Self> {
        Self::new(default_patterns())
    }

    /// Scan the text and return all recognized tags in document order
    ///
    /// The result never contains overlapping offset ranges. Bracket-like
    /// tokens that match no registered pattern are simply absent from the
    /// result; they are not an error.
    pub fn scan(&self, text: &str) -> Vec<TagMatch> {
        // Candidates from every pattern, then a single ordered sweep. The
        // sort key encodes the tie-break rule: start ascending, longer match
        // first, earlier registration first.
        let mut candidates: Vec<(usize, usize, usize, Option<String>)> = Vec::new();
        for (idx, pattern) in self.patterns.iter().enumerate() {
            for caps in pattern.regex.captures_iter(text) {
                let m = caps.get(0).expect("group 0 always present");
                let sub_type = caps.get(1).map(|g| g.as_str().to_string());
                candidates.push((m.start(), m.end(), idx, sub_type));
            }
        }

        candidates.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then(b.1.cmp(&a.1))
                .then(a.2.cmp(&b.2))
        });

        let mut matches = Vec::with_capacity(candidates.len());
        let mut cursor = 0usize;
        for (start, end, idx, sub_type) in candidates {
            if start < cursor {
                continue;
            }
            matches.push(TagMatch {
                phi_type: self.patterns[idx].phi_type,
                sub_type,
                start,
                end,
                raw: text[start..end].to_string(),
            });
            cursor = end;
        }

        matches
    }
}

/// Built-in tag patterns for Dutch medical reports
///
/// Flat tags accept Dutch and English spellings; the report sub-id is the
/// one dotted hierarchical form, capturing its subtype.
pub fn default_patterns() -> Vec<TagPattern> {
    vec![
        TagPattern::new(PhiType::PersonName, r"<(?:PERSOON|PERSON_NAME|NAAM|NAME)>"),
        TagPattern::new(
            PhiType::PersonInitials,
            r"<(?:PERSON_INITIALS|PERSOONAFKORTING)>",
        ),
        TagPattern::new(PhiType::Date, r"<(?:DATE|DATUM)>"),
        TagPattern::new(PhiType::Time, r"<(?:TIME|TIJD)>"),
        TagPattern::new(
            PhiType::PhoneNumber,
            r"<(?:PHONE|PHONENUMBER|TELEFOON|TELEFOONNUMMER)>",
        ),
        TagPattern::new(PhiType::Email, r"<(?:EMAIL|E[-_]?MAIL)>"),
        TagPattern::new(PhiType::Url, r"<(?:URL|WEBSITE)>"),
        TagPattern::new(PhiType::Address, r"<(?:ADRES|ADDRESS)>"),
        TagPattern::new(PhiType::Location, r"<(?:LOCATIE|LOCATION|PLAATS|PLACE)>"),
        TagPattern::new(
            PhiType::HospitalName,
            r"<(?:HOSPITAL_NAME|ZIEKENHUIS|HOSPITAL)>",
        ),
        TagPattern::new(PhiType::StudyName, r"<(?:STUDY[-_]?NAME|STUDIE[-_]?NAAM)>"),
        TagPattern::new(PhiType::Age, r"<(?:LEEFTIJD|AGE)>"),
        TagPattern::new(PhiType::Bsn, r"<BSN>"),
        TagPattern::new(PhiType::Iban, r"<(?:IBAN|REKENINGNUMMER)>"),
        TagPattern::new(
            PhiType::AccreditationNumber,
            r"<(?:ACCREDITATION_NUMBER|ACCREDITATIE_NUMMER|ACCREDATIE[-_]?NUMMER)>",
        ),
        TagPattern::new(PhiType::PatientId, r"<PATIENT(?:_ID|ID|NUMMER)>"),
        TagPattern::new(PhiType::ZNumber, r"<Z[-_]?(?:NUMMER|NUMBER)>"),
        // The sub-id pattern is registered before the plain document id so
        // the dotted form wins at a shared start offset.
        TagPattern::new(
            PhiType::DocumentSubId,
            r"<RAPPORT[_-]ID\.(T|R|C|DPA|RPA)[_-]NUMMER>",
        ),
        TagPattern::new(PhiType::DocumentId, r"<(?:DOCUMENT|RAPPORT)[-_]?ID>"),
        TagPattern::new(PhiType::PhiNumber, r"<PHI[-_]?(?:NUMMER|NUMBER)>"),
    ]
}
