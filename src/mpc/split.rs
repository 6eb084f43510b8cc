//! Share generation.
//!
//! Each secret byte becomes the constant term of the current polynomial, which is
//! then evaluated once per identifier. The random coefficients stay fixed for the
//! whole input; only the constant term changes from byte to byte.

use crate::core::gf256::{FieldArithmetic, GF256};
use crate::mpc::polynomial::Polynomial;

/// Writes one share byte per identifier for every byte of `secret`.
///
/// Callers must have validated that `shares.len() == identifiers.len()` and that
/// every share holds at least `secret.len()` bytes.
pub(crate) fn split_into<F: FieldArithmetic>(
    field: &F,
    polynomial: &Polynomial,
    identifiers: &[GF256],
    secret: &[u8],
    shares: &mut [&mut [u8]],
) {
    debug_assert_eq!(shares.len(), identifiers.len());
    for (pos, &byte) in secret.iter().enumerate() {
        let constant = GF256(byte);
        for (share, &x) in shares.iter_mut().zip(identifiers) {
            share[pos] = polynomial.evaluate(field, x, constant).0;
        }
    }
}
