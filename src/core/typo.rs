//! Typo injection
//!
//! Optional post-processing that perturbs a generated surrogate with a
//! single bounded edit, driven by the shared seeded source so the result is
//! reproducible. Applied only to perturbable surrogate types; structured
//! fields keep their format validity.

use crate::config::TypoConfig;
use crate::generators::{chance, weighted_index};
use rand::Rng;

/// QWERTY neighbors of a lowercase key
fn adjacent_keys(c: char) -> &'static str {
    match c {
        'q' => "wa",
        'w' => "qes",
        'e' => "wrd",
        'r' => "etf",
        't' => "ryg",
        'y' => "tuh",
        'u' => "yij",
        'i' => "uok",
        'o' => "ipl",
        'p' => "o",
        'a' => "qsz",
        's' => "awdx",
        'd' => "sefc",
        'f' => "drgv",
        'g' => "fthb",
        'h' => "gyjn",
        'j' => "hukm",
        'k' => "jil",
        'l' => "ko",
        'z' => "asx",
        'x' => "zsdc",
        'c' => "xdfv",
        'v' => "cfgb",
        'b' => "vghn",
        'n' => "bhjm",
        'm' => "njk",
        _ => "",
    }
}

/// Injects at most one edit into a surrogate
#[derive(Debug, Clone)]
pub struct TypoInjector {
    enabled: bool,
    typo_prob: f64,
    edit_weights: [f64; 3],
}

impl TypoInjector {
    /// Build an injector from configuration
    pub fn from_config(config: &TypoConfig) -> Self {
        Self {
            enabled: config.enabled,
            typo_prob: config.typo_prob,
            edit_weights: [
                config.substitution_weight,
                config.insertion_weight,
                config.deletion_weight,
            ],
        }
    }

    /// Whether injection is enabled at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Perturb the surrogate with probability `typo_prob`, otherwise return
    /// it unchanged. The probability draw always consumes exactly one value
    /// from the source, keeping the draw sequence stable.
    pub fn maybe_perturb<R: Rng>(&self, surrogate: &str, rng: &mut R) -> String {
        if !self.enabled {
            return surrogate.to_string();
        }
        if chance(rng, self.typo_prob) {
            self.perturb(surrogate, rng)
        } else {
            surrogate.to_string()
        }
    }

    /// Apply exactly one edit: adjacent-key substitution, character
    /// insertion, or character deletion, chosen by the configured relative
    /// weights; the position is uniform over valid character offsets.
    pub fn perturb<R: Rng>(&self, surrogate: &str, rng: &mut R) -> String {
        let chars: Vec<char> = surrogate.chars().collect();
        if chars.is_empty() {
            return surrogate.to_string();
        }

        match weighted_index(rng, &self.edit_weights) {
            0 => substitute(&chars, rng),
            1 => insert(&chars, rng),
            _ => delete(&chars, rng),
        }
    }
}

fn substitute<R: Rng>(chars: &[char], rng: &mut R) -> String {
    // Only positions with a mapped adjacent key qualify; diacritics and
    // punctuation fall back to insertion.
    let candidates: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| !adjacent_keys(c.to_ascii_lowercase()).is_empty())
        .map(|(i, _)| i)
        .collect();

    if candidates.is_empty() {
        return insert(chars, rng);
    }

    let pos = candidates[rng.gen_range(0..candidates.len())];
    let original = chars[pos];
    let neighbors: Vec<char> = adjacent_keys(original.to_ascii_lowercase()).chars().collect();
    let mut replacement = neighbors[rng.gen_range(0..neighbors.len())];
    if original.is_uppercase() {
        replacement = replacement.to_ascii_uppercase();
    }

    let mut out = chars.to_vec();
    out[pos] = replacement;
    out.into_iter().collect()
}

fn insert<R: Rng>(chars: &[char], rng: &mut R) -> String {
    let pos = rng.gen_range(0..=chars.len());
    // Double an adjacent key of the neighboring character when possible,
    // mimicking a fat-finger insertion.
    let base = if pos < chars.len() { chars[pos] } else { chars[pos - 1] };
    let neighbors: Vec<char> = adjacent_keys(base.to_ascii_lowercase()).chars().collect();
    let inserted = if neighbors.is_empty() {
        (b'a' + rng.gen_range(0..26u8)) as char
    } else {
        neighbors[rng.gen_range(0..neighbors.len())]
    };

    let mut out = chars.to_vec();
    out.insert(pos, inserted);
    out.into_iter().collect()
}

fn delete<R: Rng>(chars: &[char], rng: &mut R) -> String {
    if chars.len() <= 1 {
        return chars.iter().collect();
    }
    let pos = rng.gen_range(0..chars.len());
    let mut out = chars.to_vec();
    out.remove(pos);
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn injector(prob: f64) -> TypoInjector {
        TypoInjector::from_config(&TypoConfig {
            enabled: true,
            typo_prob: prob,
            substitution_weight: 1.0,
            insertion_weight: 1.0,
            deletion_weight: 1.0,
        })
    }

    /// Levenshtein distance, small inputs only
    fn edit_distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for (i, row) in dp.iter_mut().enumerate() {
            row[0] = i;
        }
        for j in 0..=b.len() {
            dp[0][j] = j;
        }
        for i in 1..=a.len() {
            for j in 1..=b.len() {
                let cost = usize::from(a[i - 1] != b[j - 1]);
                dp[i][j] = (dp[i - 1][j] + 1)
                    .min(dp[i][j - 1] + 1)
                    .min(dp[i - 1][j - 1] + cost);
            }
        }
        dp[a.len()][b.len()]
    }

    #[test]
    fn test_perturb_is_single_edit() {
        let injector = injector(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..200 {
            let out = injector.perturb("Jansen", &mut rng);
            assert!(edit_distance("Jansen", &out) <= 1);
        }
    }

    #[test]
    fn test_perturb_handles_diacritics() {
        let injector = injector(1.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            let out = injector.perturb("Zoë Brouwèr", &mut rng);
            assert!(edit_distance("Zoë Brouwèr", &out) <= 1);
        }
    }

    #[test]
    fn test_zero_probability_never_perturbs() {
        let injector = injector(0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..100 {
            assert_eq!(injector.maybe_perturb("De Boer", &mut rng), "De Boer");
        }
    }

    #[test]
    fn test_disabled_injector_passes_through() {
        let mut config = TypoConfig::default();
        config.enabled = false;
        config.typo_prob = 1.0;
        let injector = TypoInjector::from_config(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        assert_eq!(injector.maybe_perturb("Visser", &mut rng), "Visser");
    }

    #[test]
    fn test_perturb_is_reproducible() {
        let injector = injector(1.0);
        let mut rng1 = ChaCha8Rng::seed_from_u64(11);
        let mut rng2 = ChaCha8Rng::seed_from_u64(11);

        assert_eq!(
            injector.perturb("Bakker", &mut rng1),
            injector.perturb("Bakker", &mut rng2)
        );
    }

    #[test]
    fn test_single_char_never_emptied_by_delete() {
        let config = TypoConfig {
            enabled: true,
            typo_prob: 1.0,
            substitution_weight: 0.0,
            insertion_weight: 0.0,
            deletion_weight: 1.0,
        };
        let injector = TypoInjector::from_config(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(injector.perturb("J", &mut rng), "J");
    }

    #[test]
    fn test_substitution_preserves_case() {
        let config = TypoConfig {
            enabled: true,
            typo_prob: 1.0,
            substitution_weight: 1.0,
            insertion_weight: 0.0,
            deletion_weight: 0.0,
        };
        let injector = TypoInjector::from_config(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..100 {
            let out = injector.perturb("JANSEN", &mut rng);
            assert!(out.chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
