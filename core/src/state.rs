//! Opaque byte-level generator state.
//!
//! Every generator serializes to a fixed-length little-endian byte block:
//! the algorithm's state words first, then the output-cache block of its
//! provider layer. Layered blocks compose child first so a wrapper never
//! needs to know the size of the state it wraps.
//!
//! # Critical Invariants
//!
//! - `restore_state` validates the total length before reading a single
//!   word; a wrong-sized state never partially mutates a generator.
//! - Restoring a saved state reproduces the byte-exact output sequence,
//!   including half-consumed bit and word caches.

use serde::{Deserialize, Serialize};

use crate::error::RngError;

/// Serialized generator state.
///
/// The contents are opaque: the only supported operations are moving the
/// bytes (including through serde) and handing them back to a generator of
/// the same type via `restore_state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState(Vec<u8>);

impl RngState {
    pub(crate) fn with_capacity(bytes: usize) -> Self {
        RngState(Vec::with_capacity(bytes))
    }

    /// Wrap raw bytes as a state, e.g. one read back from storage.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        RngState(bytes)
    }

    /// The raw state bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Byte length of the state.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the state is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push_u32(&mut self, v: u32) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    pub(crate) fn push_u64(&mut self, v: u64) {
        self.0.extend_from_slice(&v.to_le_bytes());
    }

    /// Open a cursor over the state, validating the exact length first.
    pub(crate) fn reader(&self, expected: usize) -> Result<StateReader<'_>, RngError> {
        if self.0.len() != expected {
            return Err(RngError::InvalidStateSize {
                expected,
                actual: self.0.len(),
            });
        }
        Ok(StateReader {
            bytes: &self.0,
            pos: 0,
        })
    }
}

/// Cursor over a length-validated state block.
#[derive(Debug)]
pub(crate) struct StateReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl StateReader<'_> {
    pub(crate) fn read_u32(&mut self) -> u32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[self.pos..self.pos + 4]);
        self.pos += 4;
        u32::from_le_bytes(word)
    }

    pub(crate) fn read_u64(&mut self) -> u64 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&self.bytes[self.pos..self.pos + 8]);
        self.pos += 8;
        u64::from_le_bytes(word)
    }
}

/// Byte-exact state save and restore.
pub trait RestorableState {
    /// Capture the complete state, caches included.
    fn save_state(&self) -> RngState;

    /// Overwrite this generator's state from a previously saved block.
    ///
    /// Fails without mutating the generator if the byte length does not
    /// match this generator type's layout.
    fn restore_state(&mut self, state: &RngState) -> Result<(), RngError>;
}
