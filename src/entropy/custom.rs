//! Custom User-Provided Entropy Source.
//!
//! Serves bytes the caller queued up front, in order. Useful for pinning
//! polynomial coefficients in tests.

use alloc::collections::VecDeque;

use super::{EntropyError, EntropySource};

/// Source that buffers user-injected entropy.
#[derive(Debug, Default)]
pub struct CustomSource {
    buffer: VecDeque<u8>,
}

impl CustomSource {
    /// Creates a new empty CustomSource.
    pub fn new() -> Self {
        Self { buffer: VecDeque::new() }
    }

    /// Add entropy bytes to the pool.
    pub fn add_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes.iter().copied());
    }

    /// Bytes still queued.
    pub fn remaining(&self) -> usize {
        self.buffer.len()
    }
}

impl EntropySource for CustomSource {
    fn name(&self) -> &'static str {
        "CustomInput"
    }

    fn fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.buffer.len() < dest.len() {
            return Err(EntropyError::Exhausted);
        }
        let n = dest.len();
        for (d, s) in dest.iter_mut().zip(self.buffer.drain(..n)) {
            *d = s;
        }
        Ok(())
    }

    fn entropy_estimate(&self) -> f64 {
        // Quality of injected bytes is unknown.
        2.0
    }
}
