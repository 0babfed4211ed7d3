//! Date, time and age generators
//!
//! Dates draw a day uniformly from the configured range and pick one of the
//! Dutch formatting styles. Times choose among numeric and natural-language
//! styles by configured weights. Ages come from a two-component Gaussian
//! mixture biased toward older adults, clipped to a valid range.

use super::{chance, weighted_index, GeneratorContext};
use crate::domain::errors::PlainsightError;
use crate::domain::result::Result;
use chrono::{Datelike, Duration};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::pools::{HOUR_WORDS, MONTHS_ABBR, MONTHS_FULL};

/// Generate a date surrogate in one of the configured Dutch styles
pub fn date(ctx: &mut GeneratorContext) -> Result<String> {
    let cfg = &ctx.surrogates.date;
    let span = (cfg.range_end - cfg.range_start).num_days();
    if span < 0 {
        return Err(PlainsightError::Generation(format!(
            "date range end {} precedes start {}",
            cfg.range_end, cfg.range_start
        )));
    }

    let day_offset = ctx.rng.gen_range(0..=span);
    let picked = cfg.range_start + Duration::days(day_offset);
    let (year, month, day) = (picked.year(), picked.month() as usize, picked.day());

    let with_year = chance(&mut ctx.rng, cfg.with_year_prob);

    if chance(&mut ctx.rng, cfg.month_as_name_prob) {
        // Named month, day never padded: "3 februari 2021" / "3 feb"
        let month_str = if chance(&mut ctx.rng, cfg.month_abbr_prob) {
            MONTHS_ABBR[month - 1]
        } else {
            MONTHS_FULL[month - 1]
        };
        if with_year {
            Ok(format!("{day} {month_str} {year:04}"))
        } else {
            Ok(format!("{day} {month_str}"))
        }
    } else {
        // Numeric, day and month always share padding style
        let (day_str, month_str) = if chance(&mut ctx.rng, cfg.numeric_padded_prob) {
            (format!("{day:02}"), format!("{month:02}"))
        } else {
            (day.to_string(), month.to_string())
        };
        if with_year {
            Ok(format!("{day_str}-{month_str}-{year:04}"))
        } else {
            Ok(format!("{day_str}-{month_str}"))
        }
    }
}

/// Natural-language Dutch time phrase ("kwart voor zes", "half vier")
fn natural_time<R: Rng>(rng: &mut R) -> String {
    let base = rng.gen_range(0..12usize);
    let hour_word = HOUR_WORDS[base];
    // "half vier" means 3:30, so several phrases name the *next* hour
    let next_word = HOUR_WORDS[(base + 1) % 12];

    match rng.gen_range(0..4u8) {
        0 => format!("kwart voor {next_word}"),
        1 => format!("kwart over {hour_word}"),
        2 => format!("half {next_word}"),
        _ => format!("{hour_word} uur"),
    }
}

/// Generate a time surrogate in one of the configured styles
pub fn time(ctx: &mut GeneratorContext) -> Result<String> {
    let cfg = &ctx.surrogates.time;

    let hour = ctx.rng.gen_range(0..24u32);
    let minute = ctx.rng.gen_range(0..60u32);
    let idx = weighted_index(
        &mut ctx.rng,
        &[
            cfg.colon_weight,
            cfg.dot_weight,
            cfg.u_weight,
            cfg.natural_weight,
        ],
    );
    let uur = if chance(&mut ctx.rng, cfg.uur_suffix_prob) {
        " uur"
    } else {
        ""
    };

    let rendered = match idx {
        0 => format!("{hour:02}:{minute:02}{uur}"),
        1 => format!("{hour:02}.{minute:02}{uur}"),
        2 => format!("{hour}u{minute:02}"),
        _ => natural_time(&mut ctx.rng),
    };
    Ok(rendered)
}

/// Generate an integer age drawn from the configured Gaussian mixture
///
/// Rejection-samples to stay inside the valid range, clamping a final draw
/// when ten attempts all land outside it.
pub fn age(ctx: &mut GeneratorContext) -> Result<String> {
    let cfg = &ctx.surrogates.age;
    let usable = !cfg.means.is_empty()
        && cfg.means.len() == cfg.variances.len()
        && cfg.means.len() == cfg.weights.len();
    if !usable {
        return Ok(ctx.rng.gen_range(cfg.min..=cfg.max).to_string());
    }

    let k = weighted_index(&mut ctx.rng, &cfg.weights);
    let sigma = if cfg.variances[k] > 0.0 {
        cfg.variances[k].sqrt()
    } else {
        1.0
    };
    let normal = Normal::new(cfg.means[k], sigma)
        .map_err(|e| PlainsightError::Generation(format!("invalid age distribution: {e}")))?;

    for _ in 0..10 {
        let sample = normal.sample(&mut ctx.rng).round() as i64;
        if sample >= i64::from(cfg.min) && sample <= i64::from(cfg.max) {
            return Ok(sample.to_string());
        }
    }

    let sample = normal.sample(&mut ctx.rng).round() as i64;
    let clamped = sample.clamp(i64::from(cfg.min), i64::from(cfg.max));
    Ok(clamped.to_string())
}
