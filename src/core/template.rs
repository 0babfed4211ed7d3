//! Template mini-language for identifier-shaped surrogates
//!
//! Symbols: `#` emits a random digit, `A` an uppercase letter, `a` a
//! lowercase letter, `X` an alphanumeric character; any other character is
//! emitted verbatim. There is no escaping mechanism; templates must avoid
//! the symbol characters as literals.

use crate::domain::errors::PlainsightError;
use crate::domain::result::Result;
use rand::Rng;
use std::collections::HashMap;

const DIGITS: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALNUM: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A single emit instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmitToken {
    Digit,
    Upper,
    Lower,
    Alnum,
    Literal(char),
}

/// A parsed template: an ordered list of emit instructions
///
/// Parsing happens once; a template is stateless and reusable across calls.
#[derive(Debug, Clone)]
pub struct Template {
    tokens: Vec<EmitToken>,
}

impl Template {
    /// Parse a template string
    pub fn parse(template: &str) -> Self {
        let tokens = template
            .chars()
            .map(|c| match c {
                '#' => EmitToken::Digit,
                'A' => EmitToken::Upper,
                'a' => EmitToken::Lower,
                'X' => EmitToken::Alnum,
                other => EmitToken::Literal(other),
            })
            .collect();
        Self { tokens }
    }

    /// Render the template, drawing every symbol uniformly from the seeded
    /// source. Deterministic given a fixed rng state.
    pub fn render<R: Rng>(&self, rng: &mut R) -> String {
        let mut out = String::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match token {
                EmitToken::Digit => out.push(DIGITS[rng.gen_range(0..DIGITS.len())] as char),
                EmitToken::Upper => out.push(UPPER[rng.gen_range(0..UPPER.len())] as char),
                EmitToken::Lower => out.push(LOWER[rng.gen_range(0..LOWER.len())] as char),
                EmitToken::Alnum => out.push(ALNUM[rng.gen_range(0..ALNUM.len())] as char),
                EmitToken::Literal(c) => out.push(*c),
            }
        }
        out
    }
}

/// Parsed template lookup for identifier tags
///
/// Templates are parsed once at engine construction and shared by all runs.
/// A tag without an explicit entry falls back to the default template; with
/// no default configured the lookup is a configuration error.
pub struct TemplateEngine {
    by_tag: HashMap<String, Template>,
    fallback: Option<Template>,
}

impl TemplateEngine {
    /// Build the lookup from configured template strings
    pub fn new(by_tag: &HashMap<String, String>, fallback: Option<&str>) -> Self {
        let by_tag = by_tag
            .iter()
            .map(|(tag, template)| (tag.clone(), Template::parse(template)))
            .collect();
        Self {
            by_tag,
            fallback: fallback.map(Template::parse),
        }
    }

    /// Render the template registered for a tag label
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the tag has no template and no
    /// fallback is configured. The caller must surface this instead of
    /// silently emitting the original text.
    pub fn render_for<R: Rng>(&self, tag: &str, rng: &mut R) -> Result<String> {
        let template = self
            .by_tag
            .get(tag)
            .or(self.fallback.as_ref())
            .ok_or_else(|| {
                PlainsightError::Configuration(format!(
                    "No template registered for tag '{tag}' and no fallback configured"
                ))
            })?;
        Ok(template.render(rng))
    }
}
