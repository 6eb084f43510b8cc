//! Secret Share Definition.
//!
//! A share is the column of polynomial evaluations at one identifier:
//! - identifier: the x-coordinate, public.
//! - value: one evaluation per byte of the secret.
//!
//! # Security
//! - Implements `Zeroize` and `ZeroizeOnDrop` to wipe the value from memory.
//! - `Debug` implementation redacts the actual value.

use alloc::vec::Vec;
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A share of a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
    /// The x-coordinate.
    /// Public information (who owns the share).
    #[zeroize(skip)]
    pub identifier: u8,

    /// The y-coordinates (one per byte of the secret).
    /// Highly sensitive information.
    pub value: Vec<u8>,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("identifier", &self.identifier)
            .field("length", &self.value.len())
            .field("value", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    pub fn new(identifier: u8, value: Vec<u8>) -> Self {
        Self { identifier, value }
    }

    /// Returns a reference to the value bytes.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let s = Share::new(1, vec![10, 20]);
        assert_eq!(s.identifier, 1);
        assert_eq!(s.value(), &[10, 20]);
        assert_eq!(s.len(), 2);
        assert!(Share::new(0, vec![]).is_empty());
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, vec![0xFF; 32]);
        let debug_str = format!("{:?}", s);
        assert!(debug_str.contains("identifier: 5"));
        assert!(debug_str.contains("length: 32"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("255"));
    }

    #[test]
    fn test_zeroize_keeps_identifier() {
        let mut s = Share::new(9, vec![1, 2, 3]);
        s.zeroize();
        assert_eq!(s.identifier, 9);
        assert!(s.value.is_empty());
    }
}
