//! Operating system CSPRNG.

use rand_core::{OsRng, RngCore};

use super::{EntropyError, EntropySource};

/// Entropy drawn from the OS on every call (`getrandom`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        OsEntropy
    }
}

impl EntropySource for OsEntropy {
    fn name(&self) -> &'static str {
        "OsRng"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::error!("OS entropy source failed: {}", e);
            EntropyError::CollectionFailed
        })
    }

    fn entropy_estimate(&self) -> f64 {
        8.0
    }
}
