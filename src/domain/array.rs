//! Fixed-capacity array.

use tracing::instrument;

use crate::domain::{DomainError, DomainResult};

const STRUCTURE: &str = "array";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedArray {
    elements: Vec<i32>,
    capacity: usize,
}

impl FixedArray {
    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::ZeroCapacity {
                structure: STRUCTURE,
            });
        }
        Ok(Self {
            elements: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Append at the next free index; a full array reports instead of dropping.
    #[instrument(level = "trace", skip(self))]
    pub fn push(&mut self, value: i32) -> DomainResult<()> {
        if self.elements.len() == self.capacity {
            return Err(DomainError::CapacityExceeded {
                structure: STRUCTURE,
                capacity: self.capacity,
            });
        }
        self.elements.push(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.elements.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.elements.iter().copied()
    }
}
