//! ChaCha keystream sources.
//!
//! [`FastEntropy`] trades per-call OS requests for a reduced-round keystream keyed
//! once from the OS. [`SeededEntropy`] is keyed by the caller and is fully
//! reproducible, which makes it unsuitable for real secrets.

use rand_chacha::{ChaCha20Rng, ChaCha8Rng};
use rand_core::{OsRng, RngCore, SeedableRng};

use super::{EntropyError, EntropySource};

/// ChaCha8 keystream keyed from the OS CSPRNG.
pub struct FastEntropy {
    rng: ChaCha8Rng,
}

impl FastEntropy {
    /// Keys a new keystream from the OS.
    pub fn from_os() -> Result<Self, EntropyError> {
        let rng = ChaCha8Rng::from_rng(OsRng).map_err(|e| {
            log::error!("failed to key fast entropy source: {}", e);
            EntropyError::InitFailed
        })?;
        Ok(Self { rng })
    }
}

impl EntropySource for FastEntropy {
    fn name(&self) -> &'static str {
        "ChaCha8"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}

/// Deterministic ChaCha20 keystream from a fixed seed.
pub struct SeededEntropy {
    rng: ChaCha20Rng,
}

impl SeededEntropy {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: ChaCha20Rng::from_seed(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn name(&self) -> &'static str {
        "SeededChaCha20"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.rng.fill_bytes(dest);
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        // Anyone holding the seed predicts every byte.
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = SeededEntropy::from_seed([0x5A; 32]);
        let mut b = SeededEntropy::from_seed([0x5A; 32]);
        let mut c = SeededEntropy::from_seed([0xA5; 32]);

        let (mut ba, mut bb, mut bc) = ([0u8; 64], [0u8; 64], [0u8; 64]);
        a.fill(&mut ba).unwrap();
        b.fill(&mut bb).unwrap();
        c.fill(&mut bc).unwrap();

        assert_eq!(ba, bb);
        assert_ne!(ba, bc);
        assert_eq!(a.entropy_estimate(), 0.0);
    }

    #[test]
    fn test_fast_source_advances() {
        let mut fast = FastEntropy::from_os().unwrap();
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        fast.fill(&mut first).unwrap();
        fast.fill(&mut second).unwrap();
        assert_ne!(first, second);
        assert_eq!(fast.name(), "ChaCha8");
    }
}
