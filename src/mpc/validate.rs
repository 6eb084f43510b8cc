//! Structural checks performed before any byte is processed.
//!
//! Every public operation validates its whole input first, so a failed call never
//! leaves partially written output behind.

use alloc::vec::Vec;

use crate::core::gf256::GF256;
use crate::mpc::SharingError;

pub(crate) fn validate_threshold(threshold: usize) -> Result<(), SharingError> {
    if threshold < 1 {
        return Err(SharingError::InvalidThreshold);
    }
    Ok(())
}

/// Checks the identifier set and narrows it to field elements.
///
/// Rejects an empty set, values above 255, and repeated values.
pub(crate) fn validate_identifiers(identifiers: &[u32]) -> Result<Vec<GF256>, SharingError> {
    if identifiers.is_empty() {
        return Err(SharingError::EmptyIdentifiers);
    }

    let mut seen = [false; 256];
    let mut result = Vec::with_capacity(identifiers.len());
    for &id in identifiers {
        let x = u8::try_from(id).map_err(|_| SharingError::IdentifierOutOfRange(id))?;
        if seen[x as usize] {
            return Err(SharingError::DuplicateIdentifier(x));
        }
        seen[x as usize] = true;
        result.push(GF256(x));
    }

    if seen[0] {
        log::warn!("identifier 0 configured: its share equals the secret");
    }
    Ok(result)
}

/// Checks that there is one buffer per identifier and that all buffers have the
/// same length. Returns that common length.
pub(crate) fn validate_buffers<B: AsRef<[u8]>>(
    identifier_count: usize,
    buffers: &[B],
) -> Result<usize, SharingError> {
    let first = buffers.first().ok_or(SharingError::EmptyBufferSet)?;
    if buffers.len() != identifier_count {
        return Err(SharingError::CardinalityMismatch {
            expected: identifier_count,
            actual: buffers.len(),
        });
    }

    let length = first.as_ref().len();
    for buffer in &buffers[1..] {
        let actual = buffer.as_ref().len();
        if actual != length {
            return Err(SharingError::LengthMismatch { expected: length, actual });
        }
    }
    Ok(length)
}

pub(crate) fn validate_capacity(needed: usize, available: usize) -> Result<(), SharingError> {
    if available < needed {
        return Err(SharingError::InsufficientCapacity { needed, available });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold() {
        assert_eq!(validate_threshold(0), Err(SharingError::InvalidThreshold));
        assert!(validate_threshold(1).is_ok());
        assert!(validate_threshold(1000).is_ok());
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(validate_identifiers(&[]), Err(SharingError::EmptyIdentifiers));
        assert_eq!(
            validate_identifiers(&[1, 256]),
            Err(SharingError::IdentifierOutOfRange(256))
        );
        assert_eq!(
            validate_identifiers(&[4, 9, 4]),
            Err(SharingError::DuplicateIdentifier(4))
        );
        assert_eq!(
            validate_identifiers(&[0, 1, 255]).unwrap(),
            vec![GF256(0), GF256(1), GF256(255)]
        );
    }

    #[test]
    fn test_buffers() {
        let empty: [&[u8]; 0] = [];
        assert_eq!(validate_buffers(2, &empty), Err(SharingError::EmptyBufferSet));

        let a = [0u8; 4];
        let b = [0u8; 4];
        let c = [0u8; 3];
        assert_eq!(validate_buffers(2, &[&a[..], &b[..]]), Ok(4));
        assert_eq!(
            validate_buffers(3, &[&a[..], &b[..]]),
            Err(SharingError::CardinalityMismatch { expected: 3, actual: 2 })
        );
        assert_eq!(
            validate_buffers(2, &[&a[..], &c[..]]),
            Err(SharingError::LengthMismatch { expected: 4, actual: 3 })
        );
    }

    #[test]
    fn test_capacity() {
        assert!(validate_capacity(4, 4).is_ok());
        assert!(validate_capacity(0, 0).is_ok());
        assert_eq!(
            validate_capacity(5, 4),
            Err(SharingError::InsufficientCapacity { needed: 5, available: 4 })
        );
    }
}
