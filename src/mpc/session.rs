//! Sharing session.
//!
//! Holds the configured identifiers, the current polynomial and the precomputed
//! interpolation weights, and implements [`SecretSharing`] on top of them.
//!
//! # States
//! - **Uninitialized**: created, nothing configured. Only `configure` succeeds.
//! - **Active**: threshold, identifiers, polynomial and weights present.
//!   `configure` replaces everything, `rekey` replaces the polynomial only.
//!
//! `split` and `join` borrow the session immutably and never change its state.
//! Mutation requires `&mut self`, so sharing one session across threads needs
//! external synchronization.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

use crate::config::SessionConfig;
use crate::core::gf256::{ArithmeticMode, Engine, GF256};
use crate::entropy::{EntropySource, OsEntropy};
use crate::mpc::polynomial::Polynomial;
use crate::mpc::validate::{
    validate_buffers, validate_capacity, validate_identifiers, validate_threshold,
};
use crate::mpc::{lagrange, split, SecretSharing, Share, SharingError};

/// Boxed entropy source used by sessions built from a [`SessionConfig`].
pub type DynEntropy = Box<dyn EntropySource + Send>;

/// Everything a configured session owns.
#[derive(Debug)]
pub struct ActiveState {
    threshold: usize,
    identifiers: Vec<GF256>,
    polynomial: Polynomial,
    weights: Vec<GF256>,
}

impl ActiveState {
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn identifiers(&self) -> &[GF256] {
        &self.identifiers
    }

    /// Lagrange weights at x = 0, one per identifier, in identifier order.
    pub fn weights(&self) -> &[GF256] {
        &self.weights
    }
}

/// Lifecycle of a session.
#[derive(Debug, Default)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Active(ActiveState),
}

impl SessionState {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }
}

/// A threshold secret sharing session over GF(256).
///
/// ```
/// use gf256_sharing::{SecretSharing, SharingSession};
///
/// let mut sss = SharingSession::new();
/// sss.configure(2, &[1, 2]).unwrap();
///
/// let (mut a, mut b) = ([0u8; 1], [0u8; 1]);
/// sss.split(&[0x41], &mut [&mut a[..], &mut b[..]]).unwrap();
///
/// let mut secret = [0u8; 1];
/// sss.join(&[&a[..], &b[..]], &mut secret).unwrap();
/// assert_eq!(secret, [0x41]);
/// ```
pub struct SharingSession<R: EntropySource = DynEntropy> {
    state: SessionState,
    engine: Engine,
    rng: R,
}

impl SharingSession<DynEntropy> {
    /// An uninitialized session with the default configuration: OS entropy and the
    /// default arithmetic mode.
    pub fn new() -> Self {
        Self::with_source(Box::new(OsEntropy::new()), ArithmeticMode::default())
    }

    /// An uninitialized session built from `config`.
    ///
    /// # Failure Modes
    /// - `SharingError::Entropy` if the fast source cannot be keyed from the OS.
    pub fn from_config(config: &SessionConfig) -> Result<Self, SharingError> {
        let rng = config.randomness.build()?;
        Ok(Self::with_source(rng, config.arithmetic))
    }
}

impl Default for SharingSession<DynEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntropySource> SharingSession<R> {
    /// An uninitialized session drawing coefficients from `rng`.
    pub fn with_source(rng: R, mode: ArithmeticMode) -> Self {
        Self {
            state: SessionState::Uninitialized,
            engine: Engine::new(mode),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn threshold(&self) -> Option<usize> {
        self.active().ok().map(ActiveState::threshold)
    }

    pub fn identifiers(&self) -> Option<&[GF256]> {
        self.active().ok().map(ActiveState::identifiers)
    }

    pub fn arithmetic_mode(&self) -> ArithmeticMode {
        self.engine.mode()
    }

    pub fn entropy_source(&self) -> &R {
        &self.rng
    }

    fn active(&self) -> Result<&ActiveState, SharingError> {
        match &self.state {
            SessionState::Active(active) => Ok(active),
            SessionState::Uninitialized => Err(SharingError::NotInitialized),
        }
    }

    /// Splits `secret` into freshly allocated shares, one per configured identifier.
    ///
    /// # Safety Guarantees
    /// - Share values are wiped when each [`Share`] is dropped.
    ///
    /// # Failure Modes
    /// - `SharingError::NotInitialized` before [`SecretSharing::configure`].
    pub fn split_to_shares(&self, secret: &[u8]) -> Result<Vec<Share>, SharingError> {
        let active = self.active()?;
        let mut columns = vec![vec![0u8; self.output_size(secret.len())]; active.identifiers.len()];
        {
            let mut views: Vec<&mut [u8]> = columns.iter_mut().map(Vec::as_mut_slice).collect();
            self.split(secret, &mut views)?;
        }
        Ok(columns
            .into_iter()
            .zip(&active.identifiers)
            .map(|(value, x)| Share::new(x.0, value))
            .collect())
    }

    /// Joins `shares`, which must carry the configured identifiers in configured order.
    ///
    /// Unlike [`SecretSharing::join`], a share presented at the wrong position is
    /// reported instead of silently producing a wrong secret.
    ///
    /// # Safety Guarantees
    /// - The reconstructed secret is wiped on drop.
    /// - Nothing is reconstructed unless every check passes.
    ///
    /// # Failure Modes
    /// - `SharingError::NotInitialized` before [`SecretSharing::configure`].
    /// - `MalformedBuffers` kind: wrong share count, unequal lengths or an
    ///   identifier mismatch.
    pub fn join_shares(&self, shares: &[Share]) -> Result<Zeroizing<Vec<u8>>, SharingError> {
        let active = self.active()?;
        let views: Vec<&[u8]> = shares.iter().map(Share::value).collect();
        let len = validate_buffers(active.identifiers.len(), &views)?;

        for (share, x) in shares.iter().zip(&active.identifiers) {
            if share.identifier != x.0 {
                return Err(SharingError::IdentifierMismatch {
                    expected: x.0,
                    actual: share.identifier,
                });
            }
        }

        let mut secret = Zeroizing::new(vec![0u8; len]);
        self.join(&views, &mut secret)?;
        Ok(secret)
    }
}

impl<R: EntropySource> SecretSharing for SharingSession<R> {
    fn output_size(&self, length: usize) -> usize {
        length
    }

    fn configure(&mut self, threshold: usize, identifiers: &[u32]) -> Result<(), SharingError> {
        validate_threshold(threshold)?;
        let identifiers = validate_identifiers(identifiers)?;
        let polynomial = Polynomial::generate(threshold, &mut self.rng)?;
        let weights = lagrange::compute_weights(&self.engine, &identifiers);

        if self.rng.entropy_estimate() < 8.0 {
            log::warn!(
                "entropy source {} estimates {} bits/byte; shares may be predictable",
                self.rng.name(),
                self.rng.entropy_estimate()
            );
        }
        log::info!(
            "secret sharing configured: threshold={} shares={} engine={:?} entropy={}",
            threshold,
            identifiers.len(),
            self.engine.mode(),
            self.rng.name()
        );
        self.state = SessionState::Active(ActiveState {
            threshold,
            identifiers,
            polynomial,
            weights,
        });
        Ok(())
    }

    fn rekey(&mut self) -> Result<(), SharingError> {
        let active = match &mut self.state {
            SessionState::Active(active) => active,
            SessionState::Uninitialized => return Err(SharingError::NotInitialized),
        };
        active.polynomial = Polynomial::generate(active.threshold, &mut self.rng)?;
        log::info!("secret sharing rekeyed: threshold={}", active.threshold);
        Ok(())
    }

    fn split(&self, secret: &[u8], shares: &mut [&mut [u8]]) -> Result<usize, SharingError> {
        let active = self.active()?;
        let capacity = validate_buffers(active.identifiers.len(), shares)?;
        validate_capacity(secret.len(), capacity)?;

        log::debug!("splitting {} bytes into {} shares", secret.len(), shares.len());
        split::split_into(
            &self.engine,
            &active.polynomial,
            &active.identifiers,
            secret,
            shares,
        );
        Ok(secret.len())
    }

    fn join(&self, shares: &[&[u8]], secret: &mut [u8]) -> Result<usize, SharingError> {
        let active = self.active()?;
        let len = validate_buffers(active.identifiers.len(), shares)?;
        validate_capacity(len, secret.len())?;

        log::debug!("joining {} shares of {} bytes", shares.len(), len);
        lagrange::join_into(&self.engine, &active.weights, shares, secret);
        Ok(len)
    }
}

impl<R: EntropySource> fmt::Debug for SharingSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharingSession")
            .field("state", &self.state)
            .field("engine", &self.engine.mode())
            .field("entropy", &self.rng.name())
            .finish()
    }
}
