//! A bounded FIFO byte buffer.

use std::collections::VecDeque;
use std::fmt;

/// Fixed-capacity FIFO of bytes. Pushing into a full buffer is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBuffer {
    bytes: VecDeque<u8>,
    capacity: usize,
}

impl RingBuffer {
    /// Creates an empty buffer holding at most `capacity` bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `byte`. Returns `false`, leaving the buffer untouched, when full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes.push_back(byte);
        true
    }

    /// Removes and returns the oldest byte.
    pub fn pop(&mut self) -> Option<u8> {
        self.bytes.pop_front()
    }

    /// Number of bytes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether no bytes are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether another push would be refused.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    /// Maximum number of bytes held.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copies the held bytes, oldest first.
    #[must_use]
    pub fn contents(&self) -> Vec<u8> {
        self.bytes.iter().copied().collect()
    }
}

impl fmt::Display for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring[{}/{}]", self.len(), self.capacity)
    }
}
