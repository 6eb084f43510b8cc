//! Threshold secret sharing over GF(256).
//!
//! A secret is shared byte by byte: each byte becomes the constant term of a random
//! polynomial of degree `threshold - 1`, and the share for identifier `x` is the
//! polynomial evaluated at `x`. Joining evaluates the Lagrange interpolation of the
//! supplied shares at `x = 0`.
//!
//! # Components
//! - `coefficients`: random nonzero coefficients from an explicit entropy source.
//! - `polynomial`: the per-generation polynomial and its Horner evaluation.
//! - `split`: streams secret bytes through the polynomial.
//! - `lagrange`: interpolation weights and reconstruction.
//! - `validate`: structural checks run before any byte is touched.
//! - `session`: the configured state tying the above together.
//! - `share`: owned (identifier, bytes) pairs for the allocating API.
//!
//! # Security
//! - All bytes of one `split` call use the same random coefficients; only the
//!   constant term changes. `rekey` between unrelated secrets.
//! - Polynomials and reconstructed secrets are zeroized on drop.

pub mod coefficients;
pub mod lagrange;
pub mod polynomial;
pub mod session;
pub mod share;
pub(crate) mod split;
pub(crate) mod validate;

use core::fmt;

use crate::entropy::EntropyError;

pub use session::{ActiveState, DynEntropy, SessionState, SharingSession};
pub use share::Share;

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingError {
    /// Threshold must be at least 1.
    InvalidThreshold,
    /// The identifier set is empty.
    EmptyIdentifiers,
    /// An identifier does not fit in a field element.
    IdentifierOutOfRange(u32),
    /// The same identifier appears twice; interpolation would divide by zero.
    DuplicateIdentifier(u8),
    /// `rekey`, `split` or `join` before `configure`.
    NotInitialized,
    /// No share buffers were supplied.
    EmptyBufferSet,
    /// Number of share buffers differs from the number of identifiers.
    CardinalityMismatch { expected: usize, actual: usize },
    /// Share buffers within one call have different lengths.
    LengthMismatch { expected: usize, actual: usize },
    /// An output buffer is too small for the input.
    InsufficientCapacity { needed: usize, available: usize },
    /// A share was produced for a different identifier than the one configured at its position.
    IdentifierMismatch { expected: u8, actual: u8 },
    /// The randomness source failed.
    Entropy(EntropyError),
}

/// Coarse grouping of [`SharingError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    NotInitialized,
    MalformedBuffers,
    Entropy,
}

impl SharingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SharingError::InvalidThreshold
            | SharingError::EmptyIdentifiers
            | SharingError::IdentifierOutOfRange(_)
            | SharingError::DuplicateIdentifier(_) => ErrorKind::InvalidConfiguration,
            SharingError::NotInitialized => ErrorKind::NotInitialized,
            SharingError::EmptyBufferSet
            | SharingError::CardinalityMismatch { .. }
            | SharingError::LengthMismatch { .. }
            | SharingError::InsufficientCapacity { .. }
            | SharingError::IdentifierMismatch { .. } => ErrorKind::MalformedBuffers,
            SharingError::Entropy(_) => ErrorKind::Entropy,
        }
    }
}

impl fmt::Display for SharingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharingError::InvalidThreshold => write!(f, "threshold < 1"),
            SharingError::EmptyIdentifiers => write!(f, "identifier set is empty"),
            SharingError::IdentifierOutOfRange(id) => {
                write!(f, "identifiers must not exceed 255: {}", id)
            }
            SharingError::DuplicateIdentifier(id) => write!(f, "duplicate identifier: {}", id),
            SharingError::NotInitialized => write!(f, "secret sharing not initialized"),
            SharingError::EmptyBufferSet => write!(f, "no share buffers supplied"),
            SharingError::CardinalityMismatch { expected, actual } => write!(
                f,
                "expected {} share buffers (one per identifier), got {}",
                expected, actual
            ),
            SharingError::LengthMismatch { expected, actual } => write!(
                f,
                "share buffers are not the same length: {} != {}",
                expected, actual
            ),
            SharingError::InsufficientCapacity { needed, available } => write!(
                f,
                "output buffer too small: need {} bytes, have {}",
                needed, available
            ),
            SharingError::IdentifierMismatch { expected, actual } => write!(
                f,
                "share identifier {} does not match configured identifier {}",
                actual, expected
            ),
            SharingError::Entropy(e) => write!(f, "entropy failure: {}", e),
        }
    }
}

impl std::error::Error for SharingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SharingError::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EntropyError> for SharingError {
    fn from(e: EntropyError) -> Self {
        SharingError::Entropy(e)
    }
}

/// Byte-granular secret sharing.
///
/// Implementations are configured once with a threshold and the identifiers
/// (x-coordinates) of the shares, then split secrets into, or join secrets from,
/// one buffer per identifier.
pub trait SecretSharing {
    /// Size of the unit shared at a time, in bytes.
    fn block_size(&self) -> usize {
        1
    }

    /// Size of each share for a secret of `length` bytes.
    fn output_size(&self, length: usize) -> usize;

    /// Sets the threshold and share identifiers, generating a fresh polynomial.
    ///
    /// # Arguments
    /// * `threshold` - Minimum number of shares needed to reassemble the secret.
    /// * `identifiers` - The x-coordinate of each share, each at most 255.
    ///
    /// # Safety Guarantees
    /// - On failure the previous state, active or not, is kept unchanged.
    ///
    /// # Failure Modes
    /// - `InvalidConfiguration` kind: zero threshold, no identifiers, an identifier
    ///   above 255 or a repeated identifier.
    /// - `SharingError::Entropy` if the coefficient source fails.
    fn configure(&mut self, threshold: usize, identifiers: &[u32]) -> Result<(), SharingError>;

    /// Regenerates the random coefficients, keeping identifiers and weights.
    ///
    /// # Failure Modes
    /// - `SharingError::NotInitialized` before `configure`.
    /// - `SharingError::Entropy` if the coefficient source fails; the old
    ///   coefficients are kept.
    fn rekey(&mut self) -> Result<(), SharingError>;

    /// Splits `secret` into `shares`, one buffer per configured identifier, in order.
    ///
    /// Returns the number of bytes written to each share.
    ///
    /// # Safety Guarantees
    /// - All buffers are validated before the first write; a failed call writes nothing.
    ///
    /// # Failure Modes
    /// - `SharingError::NotInitialized` before `configure`.
    /// - `MalformedBuffers` kind: wrong share count, unequal share capacities or
    ///   shares shorter than `secret`.
    fn split(&self, secret: &[u8], shares: &mut [&mut [u8]]) -> Result<usize, SharingError>;

    /// Joins `shares`, one per configured identifier in order, into `secret`.
    ///
    /// Returns the number of bytes written to `secret`.
    ///
    /// # Safety Guarantees
    /// - All buffers are validated before the first write; a failed call writes nothing.
    ///
    /// # Failure Modes
    /// - `SharingError::NotInitialized` before `configure`.
    /// - `MalformedBuffers` kind: wrong share count, unequal share lengths or
    ///   `secret` shorter than the shares.
    /// - Fewer than `threshold` meaningful shares or shares in the wrong order are
    ///   not detected and yield an arbitrary result.
    fn join(&self, shares: &[&[u8]], secret: &mut [u8]) -> Result<usize, SharingError>;
}
