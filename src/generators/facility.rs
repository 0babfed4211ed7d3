//! Hospital, location and study-name generators
//!
//! These draw from configurable synonym-group pools. A group bundles the
//! spellings one real-world entity goes by; choosing a group first and a
//! variant second keeps the output distribution realistic even when groups
//! have different numbers of variants.

use super::{chance, GeneratorContext};
use crate::domain::errors::PlainsightError;
use crate::domain::result::Result;
use rand::Rng;

/// Generate a city/location surrogate
pub fn location(ctx: &mut GeneratorContext) -> Result<String> {
    if ctx.pools.cities.is_empty() {
        return Err(PlainsightError::Generation("city pool is empty".to_string()));
    }
    let idx = ctx.rng.gen_range(0..ctx.pools.cities.len());
    Ok(ctx.pools.cities[idx].clone())
}

/// Generate a hospital name surrogate
///
/// Picks a synonym group, then either one of its name variants or, with the
/// configured probability, the group's city form instead of the formal name.
pub fn hospital_name(ctx: &mut GeneratorContext) -> Result<String> {
    if ctx.pools.hospitals.is_empty() {
        return Err(PlainsightError::Generation(
            "hospital pool is empty".to_string(),
        ));
    }
    let idx = ctx.rng.gen_range(0..ctx.pools.hospitals.len());
    let group = &ctx.pools.hospitals[idx];

    if !group.city.is_empty() && chance(&mut ctx.rng, ctx.surrogates.hospital_city_prob) {
        return Ok(group.city.clone());
    }

    if group.names.is_empty() {
        return Err(PlainsightError::Generation(
            "hospital group has no name variants".to_string(),
        ));
    }
    let variant = ctx.rng.gen_range(0..group.names.len());
    Ok(group.names[variant].clone())
}

/// Generate a study/trial name surrogate, one variant of a synonym group
pub fn study_name(ctx: &mut GeneratorContext) -> Result<String> {
    if ctx.pools.studies.is_empty() {
        return Err(PlainsightError::Generation(
            "study pool is empty".to_string(),
        ));
    }
    let idx = ctx.rng.gen_range(0..ctx.pools.studies.len());
    let group = &ctx.pools.studies[idx];
    if group.is_empty() {
        return Err(PlainsightError::Generation(
            "study group has no variants".to_string(),
        ));
    }
    let variant = ctx.rng.gen_range(0..group.len());
    Ok(group[variant].clone())
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
    fn test_location_comes_from_pool() {
        let surrogates = SurrogateConfig::default();
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 41);

        for _ in 0..50 {
            let city = location(&mut ctx).unwrap();
            assert!(pools.cities.contains(&city));
        }
    }

    #[test]
    fn test_hospital_city_form_when_forced() {
        let mut surrogates = SurrogateConfig::default();
        surrogates.hospital_city_prob = 1.0;
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 42);

        for _ in 0..50 {
            let name = hospital_name(&mut ctx).unwrap();
            assert!(
                pools.hospitals.iter().any(|g| g.city == name),
                "not a city form: {name}"
            );
        }
    }

    #[test]
    fn test_hospital_formal_name_when_city_disabled() {
        let mut surrogates = SurrogateConfig::default();
        surrogates.hospital_city_prob = 0.0;
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 43);

        for _ in 0..50 {
            let name = hospital_name(&mut ctx).unwrap();
            assert!(
                pools.hospitals.iter().any(|g| g.names.contains(&name)),
                "unknown variant: {name}"
            );
        }
    }

    #[test]
    fn test_study_variant_comes_from_pool() {
        let surrogates = SurrogateConfig::default();
        let pools = PoolsConfig::default();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 44);

        for _ in 0..50 {
            let name = study_name(&mut ctx).unwrap();
            assert!(pools.studies.iter().any(|g| g.contains(&name)));
        }
    }

    #[test]
    fn test_empty_pools_are_errors() {
        let surrogates = SurrogateConfig::default();
        let mut pools = PoolsConfig::default();
        pools.cities.clear();
        pools.hospitals.clear();
        pools.studies.clear();
        let templates = TemplateEngine::new(&HashMap::new(), None);
        let mut ctx = ctx_with_seed(&surrogates, &pools, &templates, 45);

        assert!(location(&mut ctx).is_err());
        assert!(hospital_name(&mut ctx).is_err());
        assert!(study_name(&mut ctx).is_err());
    }
}
