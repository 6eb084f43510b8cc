//! Randomness sources for polynomial coefficients.
//!
//! The coefficient generator never reaches for a global or thread-local RNG; the
//! caller hands it an explicit [`EntropySource`]. The secrecy of a sharing is only as
//! good as this source, so the available sources are named by what they guarantee:
//!
//! - [`OsEntropy`]: the operating system CSPRNG. The default.
//! - [`FastEntropy`]: ChaCha8 keystream seeded once from the OS. Cheaper per byte,
//!   still a cryptographic generator.
//! - [`SeededEntropy`]: ChaCha20 from a caller-supplied seed. Deterministic; for tests
//!   and reproducible fixtures only.
//! - [`CustomSource`]: a queue of caller-injected bytes.

pub mod custom;
pub mod os;
pub mod seeded;

use alloc::boxed::Box;
use core::fmt;

pub use custom::CustomSource;
pub use os::OsEntropy;
pub use seeded::{FastEntropy, SeededEntropy};

/// Error types for entropy collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Source initialization failed.
    InitFailed,
    /// Failed to collect sufficient entropy bytes.
    CollectionFailed,
    /// Source is exhausted (e.g., fixed buffer).
    Exhausted,
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::InitFailed => write!(f, "entropy source failed to initialize"),
            EntropyError::CollectionFailed => write!(f, "entropy source failed to deliver bytes"),
            EntropyError::Exhausted => write!(f, "entropy source exhausted"),
        }
    }
}

impl std::error::Error for EntropyError {}

/// A trait for entropy sources.
pub trait EntropySource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Fills `dest` with random bytes from the source.
    ///
    /// # Returns
    /// * `Ok(())` on success.
    /// * `Err(EntropyError)` if the source fails.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Returns the estimated entropy per byte (in bits, 0.0-8.0).
    fn entropy_estimate(&self) -> f64;
}

impl<S: EntropySource + ?Sized> EntropySource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill(dest)
    }

    fn entropy_estimate(&self) -> f64 {
        (**self).entropy_estimate()
    }
}
