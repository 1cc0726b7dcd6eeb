//! Raw jamo input buffer.
//!
//! The buffer stores the atomic jamo the user has typed but not yet
//! submitted, in typing order. It is deliberately policy-free: the
//! two-block submission cap is game logic and lives in the caller, which
//! checks [`JamoBuffer::assembled`] before accepting a unit.

use crate::assembler;

/// Ordered buffer of typed atomic jamo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JamoBuffer {
    jamos: Vec<char>,
}

impl JamoBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self { jamos: Vec::new() }
    }

    /// The raw typed units, in order.
    pub fn as_slice(&self) -> &[char] {
        &self.jamos
    }

    /// Number of typed units (not blocks).
    pub fn len(&self) -> usize {
        self.jamos.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.jamos.is_empty()
    }

    /// Append one typed unit.
    pub fn push(&mut self, jamo: char) {
        self.jamos.push(jamo);
    }

    /// Remove the most recent unit (backspace). No-op on an empty buffer.
    pub fn pop(&mut self) -> Option<char> {
        self.jamos.pop()
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.jamos.clear();
    }

    /// The live preview: the buffer run through the input automaton.
    pub fn assembled(&self) -> Vec<char> {
        assembler::assemble(&self.jamos)
    }
}
