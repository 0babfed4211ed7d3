//! Phone, email, URL and address generators
//!
//! All values are composed from the Dutch locale tables so they look
//! plausible in clinical text without ever colliding with a real person's
//! details by construction.

use super::pools::{AREA_CODES, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, STREETS, URL_PREFIXES};
use super::{chance, pick, GeneratorContext};
use crate::domain::errors::PlainsightError;
use crate::domain::result::Result;
use rand::Rng;

fn random_city(ctx: &mut GeneratorContext) -> Result<String> {
    if ctx.pools.cities.is_empty() {
        return Err(PlainsightError::Generation("city pool is empty".to_string()));
    }
    let idx = ctx.rng.gen_range(0..ctx.pools.cities.len());
    Ok(ctx.pools.cities[idx].clone())
}

/// Generate a phone number surrogate
///
/// With the configured probability this is an internal hospital pager
/// ("sein") number instead of a public phone number; otherwise it is a
/// mobile or landline number in common Dutch notation.
pub fn phone_number(ctx: &mut GeneratorContext) -> Result<String> {
    if chance(&mut ctx.rng, ctx.surrogates.phone_sein_prob) {
        return Ok(format!("sein {}", ctx.rng.gen_range(10000..100000u32)));
    }

    if ctx.rng.gen::<bool>() {
        // Mobile, hyphenated or spaced
        let subscriber = ctx.rng.gen_range(10_000_000..100_000_000u32);
        if ctx.rng.gen::<bool>() {
            Ok(format!("06-{subscriber}"))
        } else {
            Ok(format!("06 {subscriber}"))
        }
    } else {
        let area = pick(&mut ctx.rng, AREA_CODES);
        let subscriber = ctx.rng.gen_range(1_000_000..10_000_000u32);
        Ok(format!("0{area}-{subscriber}"))
    }
}

/// Generate an email surrogate composed from the name pools
pub fn email(ctx: &mut GeneratorContext) -> Result<String> {
    let first = pick(&mut ctx.rng, FIRST_NAMES).to_lowercase();
    let last = pick(&mut ctx.rng, LAST_NAMES).to_lowercase();
    let domain = pick(&mut ctx.rng, EMAIL_DOMAINS);

    let local = match ctx.rng.gen_range(0..3u8) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{last}"),
        _ => {
            let initial = first.chars().next().unwrap_or('x');
            format!("{initial}.{last}")
        }
    };

    // A minority of addresses carry a number suffix.
    if chance(&mut ctx.rng, 0.3) {
        let n = ctx.rng.gen_range(1..100u32);
        Ok(format!("{local}{n}@{domain}"))
    } else {
        Ok(format!("{local}@{domain}"))
    }
}

/// Generate a practice/clinic URL surrogate
pub fn url(ctx: &mut GeneratorContext) -> Result<String> {
    let prefix = pick(&mut ctx.rng, URL_PREFIXES);
    let city = random_city(ctx)?.to_lowercase().replace(' ', "");

    if chance(&mut ctx.rng, 0.3) {
        Ok(format!("https://www.{prefix}{city}.nl"))
    } else {
        Ok(format!("www.{prefix}{city}.nl"))
    }
}

/// Generate a single-line Dutch address surrogate
///
/// Street and house number, postcode and city: "Kerkstraat 12, 5038 AB
/// Tilburg".
pub fn address(ctx: &mut GeneratorContext) -> Result<String> {
    let street = pick(&mut ctx.rng, STREETS);
    let number = ctx.rng.gen_range(1..250u32);

    let digits = ctx.rng.gen_range(1000..10000u32);
    let letter1 = (b'A' + ctx.rng.gen_range(0..26u8)) as char;
    let letter2 = (b'A' + ctx.rng.gen_range(0..26u8)) as char;
    let city = random_city(ctx)?;

    Ok(format!("{street} {number}, {digits} {letter1}{letter2} {city}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PoolsConfig, SurrogateConfig};
    use crate::core::template::TemplateEngine;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn ctx_with_seed<'a>(
        surrogates: &'a SurrogateConfig,
        pools: &'a PoolsConfig,
        templates: &'a TemplateEngine,
        seed: u64,
    ) -> GeneratorContext<'a> {
        GeneratorContext::new(ChaCha8Rng::seed_from_u64(seed), surrogates, pools, templates)
    }

    #[test]
    fn test_phone_sein_branch_when_forced() {
        let mut surrogates = SurrogateConfig::default();
        surrogates.phone_sein_prob = 1.0;
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 31);

        for _ in 0..50 {
            let number = phone_number(&mut ctx).unwrap();
            assert!(number.starts_with("sein "), "not a sein: {number}");
            assert_eq!(number.len(), "sein ".len() + 5);
        }
    }

    #[test]
    fn test_phone_public_numbers_start_with_zero() {
        let mut surrogates = SurrogateConfig::default();
        surrogates.phone_sein_prob = 0.0;
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 32);

        for _ in 0..100 {
            let number = phone_number(&mut ctx).unwrap();
            assert!(number.starts_with('0'), "unexpected prefix: {number}");
        }
    }

    #[test]
    fn test_email_has_local_and_domain() {
        let surrogates = SurrogateConfig::default();
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 33);

        for _ in 0..100 {
            let addr = email(&mut ctx).unwrap();
            let (local, domain) = addr.split_once('@').expect("missing @");
            assert!(!local.is_empty());
            assert!(EMAIL_DOMAINS.contains(&domain), "bad domain: {domain}");
            assert_eq!(addr, addr.to_lowercase());
        }
    }

    #[test]
    fn test_url_ends_with_nl() {
        let surrogates = SurrogateConfig::default();
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 34);

        for _ in 0..50 {
            let link = url(&mut ctx).unwrap();
            assert!(link.ends_with(".nl"), "bad url: {link}");
            assert!(!link.contains(' '), "space in url: {link}");
        }
    }

    #[test]
    fn test_address_shape() {
        let surrogates = SurrogateConfig::default();
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 35);

        for _ in 0..50 {
            let addr = address(&mut ctx).unwrap();
            let (street_part, place_part) = addr.split_once(", ").expect("missing comma");
            assert!(STREETS.iter().any(|s| street_part.starts_with(s)));
            // Postcode: four digits, space, two uppercase letters
            let postcode = &place_part[..7];
            assert!(postcode[..4].chars().all(|c| c.is_ascii_digit()));
            assert!(postcode[5..].chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_empty_city_pool_is_an_error() {
        let surrogates = SurrogateConfig::default();
        let mut pools = PoolsConfig::default();
        pools.cities.clear();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 36);

        assert!(url(&mut ctx).is_err());
        assert!(address(&mut ctx).is_err());
    }
}
