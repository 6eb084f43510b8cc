//! Random polynomial coefficients.
//!
//! Coefficients are drawn uniformly from [1, 255] by rejection: zero bytes are
//! redrawn from the same source.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::{Zeroize, Zeroizing};

use crate::core::gf256::GF256;
use crate::entropy::{EntropyError, EntropySource};

/// Redraws allowed per coefficient before the source is considered broken.
const MAX_REDRAWS: usize = 64;

/// Draws nonzero field elements from a caller-supplied entropy source.
///
/// Holds nothing but the borrowed source.
pub struct CoefficientGenerator<'a, R: EntropySource + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: EntropySource + ?Sized> CoefficientGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }

    /// Produces `count` coefficients in [1, 255].
    ///
    /// # Returns
    /// * `Ok(coefficients)`, wiped when dropped.
    /// * `Err(EntropyError)` if the source fails, or keeps yielding zeros.
    pub fn generate(&mut self, count: usize) -> Result<Zeroizing<Vec<GF256>>, EntropyError> {
        let mut raw = Zeroizing::new(vec![0u8; count]);
        self.rng.fill(&mut raw)?;

        let mut redraw = [0u8; 1];
        for byte in raw.iter_mut() {
            let mut attempts = 0;
            while *byte == 0 {
                if attempts == MAX_REDRAWS {
                    log::error!(
                        "entropy source {} yielded {} consecutive zero bytes",
                        self.rng.name(),
                        MAX_REDRAWS
                    );
                    return Err(EntropyError::CollectionFailed);
                }
                self.rng.fill(&mut redraw)?;
                *byte = redraw[0];
                attempts += 1;
            }
        }
        redraw.zeroize();

        Ok(Zeroizing::new(raw.iter().map(|&b| GF256(b)).collect()))
    }
}
