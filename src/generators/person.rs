//! Person name and initials generators
//!
//! Names compose from the Dutch first/last name pools with tussenvoegsel
//! particles. Structure (first-only, last-only, full, initials), order and
//! casing vary per configured probabilities. A previously drawn name may be
//! reused for a *different* original value with the configured reuse
//! probability; repeats of the same original value are handled upstream by
//! the surrogate registry, not here.

use super::{chance, pick, pools, GeneratorContext};
use crate::domain::result::Result;
use rand::Rng;

/// A drawn name, kept apart so initials and reuse can recombine the parts
#[derive(Debug, Clone)]
pub struct PersonNameParts {
    /// First name
    pub first: String,
    /// Optional tussenvoegsel ("van der", "de", ...)
    pub particle: Option<String>,
    /// Last name without particle
    pub last: String,
}

impl PersonNameParts {
    /// Last name including its particle, e.g. "van der Berg"
    pub fn last_with_particle(&self) -> String {
        match &self.particle {
            Some(p) => format!("{p} {}", self.last),
            None => self.last.clone(),
        }
    }
}

fn draw_fresh(ctx: &mut GeneratorContext) -> PersonNameParts {
    let first = pick(&mut ctx.rng, pools::FIRST_NAMES).to_string();
    let particle = if chance(&mut ctx.rng, ctx.surrogates.person.particle_prob) {
        Some(pick(&mut ctx.rng, pools::PARTICLES).to_string())
    } else {
        None
    };
    let last = pick(&mut ctx.rng, pools::LAST_NAMES).to_string();
    PersonNameParts {
        first,
        particle,
        last,
    }
}

/// Obtain name parts, reusing an earlier draw with the configured
/// probability. Reuse is independent sampling across distinct original
/// values; fresh draws are remembered for later reuse.
fn obtain_parts(ctx: &mut GeneratorContext) -> PersonNameParts {
    if !ctx.drawn_names.is_empty() && chance(&mut ctx.rng, ctx.surrogates.person_name_reuse_prob)
    {
        let idx = ctx.rng.gen_range(0..ctx.drawn_names.len());
        return ctx.drawn_names[idx].clone();
    }
    let parts = draw_fresh(ctx);
    ctx.drawn_names.push(parts.clone());
    parts
}

/// Compact initials string from a first name plus `extra` additional drawn
/// names, joined without spaces: "J.", "J.S.", "J.S.T."
fn initials_from_first(ctx: &mut GeneratorContext, first: &str, extra: usize) -> String {
    let mut initials = String::new();
    if let Some(c) = first.trim().chars().next() {
        initials.push(c.to_ascii_uppercase());
        initials.push('.');
    }
    for _ in 0..extra {
        let name = pick(&mut ctx.rng, pools::FIRST_NAMES);
        if let Some(c) = name.chars().next() {
            initials.push(c.to_ascii_uppercase());
            initials.push('.');
        }
    }
    initials
}

/// Generate a person name surrogate
pub fn person_name(ctx: &mut GeneratorContext) -> Result<String> {
    let parts = obtain_parts(ctx);
    let person = &ctx.surrogates.person;

    // Basic structure: first-only, last-only, or full.
    let draw = ctx.rng.gen::<f64>();
    let (use_first, use_last) = if draw < person.first_only_prob {
        (true, false)
    } else if draw < person.first_only_prob + person.last_only_prob {
        (false, true)
    } else {
        (true, true)
    };

    // Initials only when a last name is present; never a lone initial.
    let use_initials =
        use_first && use_last && chance(&mut ctx.rng, ctx.surrogates.person.initials_prob);

    let first_part = if use_initials {
        let max = ctx.surrogates.person.max_initials.max(1);
        let extra = ctx.rng.gen_range(0..max);
        initials_from_first(ctx, &parts.first, extra)
    } else {
        parts.first.clone()
    };

    let mut name = match (use_first, use_last) {
        (true, false) => first_part,
        (false, true) => parts.last_with_particle(),
        _ => {
            if chance(&mut ctx.rng, ctx.surrogates.person.reverse_order_prob) {
                format!("{}, {first_part}", parts.last_with_particle())
            } else {
                format!("{first_part} {}", parts.last_with_particle())
            }
        }
    };

    let casing = ctx.rng.gen::<f64>();
    if casing < ctx.surrogates.person.lowercase_prob {
        name = name.to_lowercase();
    } else if casing < ctx.surrogates.person.lowercase_prob + ctx.surrogates.person.uppercase_prob
    {
        name = name.to_uppercase();
    }

    Ok(name)
}

/// Generate bare initials derived from a drawn name, keeping particle
/// letters lowercase: "J.B.", "S.v.d.J."
pub fn person_initials(ctx: &mut GeneratorContext) -> Result<String> {
    let parts = obtain_parts(ctx);

    let mut out = String::new();
    if let Some(c) = parts.first.chars().next() {
        out.push(c.to_ascii_uppercase());
        out.push('.');
    }
    if let Some(particle) = &parts.particle {
        for word in particle.split_whitespace() {
            if let Some(c) = word.chars().next() {
                out.push(c.to_ascii_lowercase());
                out.push('.');
            }
        }
    }
    if let Some(c) = parts.last.chars().next() {
        out.push(c.to_ascii_uppercase());
        out.push('.');
    }

    Ok(out)
}
