//! Bounded FIFO queue over a ring buffer.
//!
//! `front` is the slot of the oldest element, `rear` the next free slot; both
//! advance modulo capacity.

use tracing::instrument;

use crate::domain::{DomainError, DomainResult};

const STRUCTURE: &str = "queue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue {
    slots: Vec<i32>,
    front: usize,
    rear: usize,
    len: usize,
}

impl Queue {
    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::ZeroCapacity {
                structure: STRUCTURE,
            });
        }
        Ok(Self {
            slots: vec![0; capacity],
            front: 0,
            rear: 0,
            len: 0,
        })
    }

    #[instrument(level = "trace", skip(self))]
    pub fn enqueue(&mut self, value: i32) -> DomainResult<()> {
        if self.len == self.capacity() {
            return Err(DomainError::CapacityExceeded {
                structure: STRUCTURE,
                capacity: self.capacity(),
            });
        }
        self.slots[self.rear] = value;
        self.rear = (self.rear + 1) % self.capacity();
        self.len += 1;
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn dequeue(&mut self) -> Option<i32> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.front];
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        Some(value)
    }

    pub fn peek(&self) -> Option<i32> {
        (self.len > 0).then(|| self.slots[self.front])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Front to rear, following wrap-around.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.len).map(move |offset| self.slots[(self.front + offset) % self.capacity()])
    }
}
