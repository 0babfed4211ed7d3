//! Surrogate generators
//!
//! One generator per PHI type, dispatched through a closed match so adding a
//! type is a compile-time-checked extension. Every generator draws from the
//! run's shared seeded source through [`GeneratorContext`]; the draw order is
//! fixed, which makes runs bit-for-bit reproducible under a fixed seed.

pub mod contact;
pub mod datetime;
pub mod facility;
pub mod ident;
pub mod person;
pub mod pools;

use crate::config::{PoolsConfig, SurrogateConfig};
use crate::core::scanner::TagMatch;
use crate::core::template::TemplateEngine;
use crate::domain::phi::PhiType;
use crate::domain::result::Result;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Per-run generator state
///
/// The random source cursor and the drawn-name memory are the only mutable
/// fields; configuration, pools and templates are read-only for the whole
/// run.
pub struct GeneratorContext<'a> {
    /// The run's shared seeded random source
    pub rng: ChaCha8Rng,
    /// Surrogate generation knobs
    pub surrogates: &'a SurrogateConfig,
    /// Locale data pools
    pub pools: &'a PoolsConfig,
    /// Parsed identifier templates
    pub templates: &'a TemplateEngine,
    /// Names drawn earlier in this run, available for probabilistic reuse
    pub drawn_names: Vec<person::PersonNameParts>,
}

impl<'a> GeneratorContext<'a> {
    /// Create a fresh context for one run
    pub fn new(
        rng: ChaCha8Rng,
        surrogates: &'a SurrogateConfig,
        pools: &'a PoolsConfig,
        templates: &'a TemplateEngine,
    ) -> Self {
        Self {
            rng,
            surrogates,
            pools,
            templates,
            drawn_names: Vec::new(),
        }
    }
}

/// Generate a surrogate for a matched tag
///
/// # Errors
///
/// Returns a configuration error for an identifier tag without a template
/// and no fallback, or a generation error when a pool a generator must
/// sample from is empty. Errors surface to the caller; a failed tag is
/// never silently replaced by its original text.
pub fn generate(tag: &TagMatch, ctx: &mut GeneratorContext) -> Result<String> {
    match tag.phi_type {
        PhiType::PersonName => person::person_name(ctx),
        PhiType::PersonInitials => person::person_initials(ctx),
        PhiType::Age => datetime::age(ctx),
        PhiType::Date => datetime::date(ctx),
        PhiType::Time => datetime::time(ctx),
        PhiType::PhoneNumber => contact::phone_number(ctx),
        PhiType::Email => contact::email(ctx),
        PhiType::Url => contact::url(ctx),
        PhiType::Address => contact::address(ctx),
        PhiType::Location => facility::location(ctx),
        PhiType::HospitalName => facility::hospital_name(ctx),
        PhiType::StudyName => facility::study_name(ctx),
        PhiType::Bsn => Ok(ident::bsn(&mut ctx.rng)),
        PhiType::Iban => Ok(ident::iban(&mut ctx.rng)),
        PhiType::AccreditationNumber => Ok(ident::accreditation_number(&mut ctx.rng)),
        PhiType::PatientId | PhiType::ZNumber | PhiType::DocumentId | PhiType::PhiNumber => {
            ctx.templates.render_for(tag.phi_type.label(), &mut ctx.rng)
        }
        PhiType::DocumentSubId => Ok(ident::document_sub_id(
            tag.sub_type.as_deref(),
            &mut ctx.rng,
        )),
    }
}

/// Bernoulli draw with probability `p`, consuming exactly one value
pub fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Weighted choice over relative weights
///
/// Falls back to a uniform draw when the weights sum to zero, so a
/// misconfigured all-zero table still terminates.
pub fn weighted_index<R: Rng>(rng: &mut R, weights: &[f64]) -> usize {
    debug_assert!(!weights.is_empty());
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.gen_range(0..weights.len());
    }

    let draw = rng.gen::<f64>() * total;
    let mut acc = 0.0;
    for (i, w) in weights.iter().enumerate() {
        acc += w;
        if draw <= acc {
            return i;
        }
    }
    weights.len() - 1
}

/// Uniform choice from a non-empty slice
pub(crate) fn pick<'s, R: Rng, T: ?Sized>(rng: &mut R, items: &'s [&T]) -> &'s T {
    items[rng.gen_range(0..items.len())]
}
