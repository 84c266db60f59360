//! Domain layer: the data structures themselves
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod array;
pub mod bst;
pub mod error;
pub mod graph;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use array::FixedArray;
pub use bst::{Bst, BstNode};
pub use error::{DomainError, DomainResult};
pub use graph::Graph;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
