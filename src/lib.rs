//! Threshold secret sharing over GF(2^8).
//!
//! A secret byte stream is split into one share per identifier so that any
//! `threshold` shares reconstruct it exactly and fewer reveal nothing about it.
//!
//! - [`crate::core::gf256`]: field arithmetic, bit-serial and table-backed.
//! - [`entropy`]: explicit randomness sources for polynomial coefficients.
//! - [`mpc`]: the sharing session, split and join.
//! - [`config`]: session configuration.
//!
//! ```
//! use gf256_sharing::{SecretSharing, SharingSession};
//!
//! let mut sss = SharingSession::new();
//! sss.configure(3, &[1, 2, 3, 4, 5]).unwrap();
//! let shares = sss.split_to_shares(b"attack at dawn").unwrap();
//!
//! sss.configure(3, &[2, 4, 5]).unwrap();
//! let picked = [shares[1].clone(), shares[3].clone(), shares[4].clone()];
//! assert_eq!(&sss.join_shares(&picked).unwrap()[..], b"attack at dawn");
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod core;
pub mod entropy;
pub mod mpc;

pub use crate::config::{RandomnessPolicy, SessionConfig};
pub use crate::core::gf256::{ArithmeticMode, GF256};
pub use crate::entropy::{EntropyError, EntropySource};
pub use crate::mpc::{ErrorKind, SecretSharing, Share, SharingError, SharingSession};
