//! The sharing polynomial.
//!
//! Coefficients are stored highest degree first, the order Horner's method consumes
//! them. The final slot is the constant term: it holds a random placeholder between
//! evaluations and is replaced by the secret byte at evaluation time, so the stored
//! polynomial never contains secret data.

use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroizing;

use crate::core::gf256::{FieldArithmetic, GF256};
use crate::entropy::{EntropyError, EntropySource};
use crate::mpc::coefficients::CoefficientGenerator;

/// A random polynomial of degree `threshold - 1` awaiting its constant term.
pub struct Polynomial {
    coefficients: Zeroizing<Vec<GF256>>,
}

impl Polynomial {
    /// Draws a fresh polynomial with `threshold` coefficients.
    pub fn generate<R: EntropySource + ?Sized>(
        threshold: usize,
        rng: &mut R,
    ) -> Result<Self, EntropyError> {
        let coefficients = CoefficientGenerator::new(rng).generate(threshold)?;
        Ok(Self { coefficients })
    }

    /// Number of coefficients, including the constant slot.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates the polynomial at `x` with `constant` in the final slot.
    ///
    /// Horner's rule from `r = 0`: `r = r * x + c` for each coefficient in order.
    #[inline]
    pub fn evaluate<F: FieldArithmetic>(&self, field: &F, x: GF256, constant: GF256) -> GF256 {
        let head = match self.coefficients.split_last() {
            Some((_, head)) => head,
            None => return constant,
        };
        let mut r = GF256::ZERO;
        for &c in head {
            r = field.mul(r, x) + c;
        }
        field.mul(r, x) + constant
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<GF256>) -> Self {
        Self {
            coefficients: Zeroizing::new(coefficients),
        }
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("len", &self.coefficients.len())
            .field("coefficients", &"***SENSITIVE***")
            .finish()
    }
}
