//! Secret reconstruction from shares.
//!
//! Lagrange interpolation over GF(256) evaluated at x = 0. The basis weights depend
//! only on the identifier set, so they are computed once per configuration and
//! reused for every byte of every join.

use alloc::vec::Vec;

use crate::core::gf256::{FieldArithmetic, GF256};

/// Computes the Lagrange basis weight of every identifier at x = 0.
///
/// lambda_i = prod_{j != i} x_j / prod_{j != i} (x_j - x_i)
///
/// Subtraction is XOR in GF(2^8).
///
/// # Safety Guarantees
/// - Depends only on the public identifiers, never on share data.
///
/// # Failure Modes
/// - Identifiers must be distinct. A repeated identifier makes a denominator
///   zero, its inverse is taken as 0 and the weight is meaningless.
pub fn compute_weights<F: FieldArithmetic>(field: &F, identifiers: &[GF256]) -> Vec<GF256> {
    let mut weights = Vec::with_capacity(identifiers.len());
    for (i, &xi) in identifiers.iter().enumerate() {
        let mut numerator = GF256::ONE;
        let mut denominator = GF256::ONE;
        for (j, &xj) in identifiers.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = field.mul(numerator, xj);
            denominator = field.mul(denominator, xj + xi);
        }
        weights.push(field.mul(numerator, field.inv(denominator)));
    }
    weights
}

/// Reconstructs `secret[..len]` where `len` is the common share length.
///
/// Each output byte is the XOR-sum of `share[i][pos] * weights[i]`. Callers must
/// have validated cardinality, equal share lengths and output capacity.
pub(crate) fn join_into<F: FieldArithmetic>(
    field: &F,
    weights: &[GF256],
    shares: &[&[u8]],
    secret: &mut [u8],
) {
    debug_assert_eq!(shares.len(), weights.len());
    let len = shares.first().map_or(0, |s| s.len());
    for (pos, out) in secret[..len].iter_mut().enumerate() {
        let mut sum = GF256::ZERO;
        for (share, &w) in shares.iter().zip(weights) {
            sum += field.mul(GF256(share[pos]), w);
        }
        *out = sum.0;
    }
}
