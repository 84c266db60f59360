//! Bounded LIFO stack.

use tracing::instrument;

use crate::domain::{DomainError, DomainResult};

const STRUCTURE: &str = "stack";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    elements: Vec<i32>,
    capacity: usize,
}

impl Stack {
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

    #[instrument(level = "trace", skip(self))]
    pub fn pop(&mut self) -> Option<i32> {
        self.elements.pop()
    }

    pub fn peek(&self) -> Option<i32> {
        self.elements.last().copied()
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

    /// Top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.elements.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_stack_when_popping_then_none() {
        let mut stack = Stack::with_capacity(1).unwrap();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn given_zero_capacity_when_creating_then_rejects() {
        assert_eq!(
            Stack::with_capacity(0),
            Err(DomainError::ZeroCapacity { structure: "stack" })
        );
    }
}
