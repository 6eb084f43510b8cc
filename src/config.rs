//! Configuration for sharing sessions.
//!
//! Defines the user-selectable knobs of a [`SharingSession`](crate::SharingSession).
//! The randomness policy is security-relevant: it decides whether the shares are
//! actually unpredictable to someone holding fewer than `threshold` of them.

use alloc::boxed::Box;
use core::fmt;

pub use crate::core::gf256::ArithmeticMode;
use crate::entropy::{EntropyError, EntropySource, FastEntropy, OsEntropy, SeededEntropy};

/// Main configuration structure for a sharing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Multiplication engine: shared product table or bit-serial.
    pub arithmetic: ArithmeticMode,

    /// Where polynomial coefficients come from.
    pub randomness: RandomnessPolicy,
}

/// Source of polynomial coefficients.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum RandomnessPolicy {
    /// The OS CSPRNG on every draw.
    #[default]
    Os,
    /// ChaCha8 keystream keyed once from the OS.
    Fast,
    /// ChaCha20 keystream from a fixed seed. Anyone who knows the seed can
    /// recompute every coefficient, and with them the secret from a single share.
    /// Test fixtures only.
    Seeded([u8; 32]),
}

impl RandomnessPolicy {
    /// Instantiates the entropy source this policy names.
    pub fn build(&self) -> Result<Box<dyn EntropySource + Send>, EntropyError> {
        if !self.is_unpredictable() {
            log::warn!("using deterministic coefficient source; shares are not secret");
        }
        match self {
            RandomnessPolicy::Os => Ok(Box::new(OsEntropy::new())),
            RandomnessPolicy::Fast => {
                log::info!("using fast ChaCha8 coefficient source");
                Ok(Box::new(FastEntropy::from_os()?))
            }
            RandomnessPolicy::Seeded(seed) => Ok(Box::new(SeededEntropy::from_seed(*seed))),
        }
    }

    /// Whether coefficients are unpredictable to an outside observer.
    pub fn is_unpredictable(&self) -> bool {
        !matches!(self, RandomnessPolicy::Seeded(_))
    }
}

impl fmt::Debug for RandomnessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomnessPolicy::Os => write!(f, "Os"),
            RandomnessPolicy::Fast => write!(f, "Fast"),
            RandomnessPolicy::Seeded(_) => write!(f, "Seeded(***)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.randomness, RandomnessPolicy::Os);
        assert_eq!(config.arithmetic, ArithmeticMode::default());
        assert!(config.randomness.is_unpredictable());
    }

    #[cfg(feature = "gf256-table")]
    #[test]
    fn test_table_feature_selects_table_mode() {
        assert_eq!(ArithmeticMode::default(), ArithmeticMode::Table);
    }

    #[test]
    fn test_build_sources() {
        assert_eq!(RandomnessPolicy::Os.build().unwrap().name(), "OsRng");
        assert_eq!(RandomnessPolicy::Fast.build().unwrap().name(), "ChaCha8");
        let seeded = RandomnessPolicy::Seeded([9; 32]);
        assert_eq!(seeded.build().unwrap().name(), "SeededChaCha20");
        assert!(!seeded.is_unpredictable());
    }

    #[test]
    fn test_only_seeded_policy_is_predictable() {
        for policy in [RandomnessPolicy::Os, RandomnessPolicy::Fast] {
            assert!(policy.is_unpredictable(), "{:?}", policy);
            assert!(policy.build().unwrap().entropy_estimate() >= 8.0);
        }
        let seeded = RandomnessPolicy::Seeded([3; 32]);
        assert!(!seeded.is_unpredictable());
        assert_eq!(seeded.build().unwrap().entropy_estimate(), 0.0);
    }

    #[test]
    fn test_seed_is_not_printed() {
        let s = format!("{:?}", RandomnessPolicy::Seeded([0xAB; 32]));
        assert_eq!(s, "Seeded(***)");
    }

    #[test]
    fn test_seeded_config_reproduces_shares() {
        use crate::{SecretSharing, SharingSession};

        let config = SessionConfig {
            arithmetic: ArithmeticMode::BitSerial,
            randomness: RandomnessPolicy::Seeded([1; 32]),
        };
        let mut a = SharingSession::from_config(&config).unwrap();
        let mut b = SharingSession::from_config(&config).unwrap();
        a.configure(3, &[1, 2, 3]).unwrap();
        b.configure(3, &[1, 2, 3]).unwrap();
        assert_eq!(a.split_to_shares(b"x").unwrap(), b.split_to_shares(b"x").unwrap());
    }
}
