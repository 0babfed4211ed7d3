//! Run seeding
//!
//! Derives the 64-bit seed that drives every random draw in a run and hands
//! out the single seeded generator shared by all downstream generators.

use crate::domain::phi::SeedSource;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Seed derivation for a run
///
/// Precedence: an explicit seed is used unchanged; otherwise, when
/// document-hash seeding is enabled (the default), the seed is derived from
/// a SHA-256 hash of the whitespace-trimmed document text, so identical
/// documents always produce identical output and a single differing
/// character yields a different seed. With both disabled the seed comes
/// from system entropy and reproducibility is not guaranteed.
#[derive(Debug, Clone)]
pub struct SeedManager {
    explicit: Option<u64>,
    hash_seeding: bool,
}

impl SeedManager {
    /// Create a seed manager
    pub fn new(explicit: Option<u64>, hash_seeding: bool) -> Self {
        Self {
            explicit,
            hash_seeding,
        }
    }

    /// Derive the seed for a document
    pub fn seed_for(&self, text: &str) -> (u64, SeedSource) {
        if let Some(seed) = self.explicit {
            return (seed, SeedSource::Explicit);
        }
        if self.hash_seeding {
            return (document_hash_seed(text), SeedSource::DocumentHash);
        }
        (OsRng.next_u64(), SeedSource::Entropy)
    }

    /// Build the run's random source
    ///
    /// One generator per run, shared by every downstream generator and never
    /// re-seeded mid-run. `ChaCha8Rng` keeps the stream stable across `rand`
    /// point releases, unlike `StdRng`.
    pub fn rng_for(&self, text: &str) -> (ChaCha8Rng, u64, SeedSource) {
        let (seed, source) = self.seed_for(text);
        (ChaCha8Rng::seed_from_u64(seed), seed, source)
    }
}

/// Stable document hash seed: SHA-256 over the trimmed text, first eight
/// bytes little-endian
fn document_hash_seed(text: &str) -> u64 {
    let digest = Sha256::digest(text.trim().as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
