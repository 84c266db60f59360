//! Plain-text rendering of each structure.
//!
//! Line formats follow the classic console demo: space-terminated values for
//! buffers and the BST, `a -> b -> NULL` chains for linked structures.

use itertools::Itertools;

use crate::domain::{Bst, FixedArray, Graph, LinkedList, Queue, Stack};

/// A titled block of output lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn extend_lines(mut self, lines: impl IntoIterator<Item = String>) -> Self {
        self.lines.extend(lines);
        self
    }
}

fn spaced(values: impl Iterator<Item = i32>) -> String {
    values.map(|v| format!("{v} ")).join("")
}

fn chained(values: impl Iterator<Item = i32>) -> String {
    values.map(|v| format!("{v} -> ")).join("") + "NULL"
}

pub fn array_line(array: &FixedArray) -> String {
    format!("Array: {}", spaced(array.iter()))
}

pub fn linked_list_line(list: &LinkedList) -> String {
    format!("Linked List: {}", chained(list.iter()))
}

pub fn stack_line(stack: &Stack) -> String {
    format!("Stack (top to bottom): {}", spaced(stack.iter()))
}

pub fn queue_line(queue: &Queue) -> String {
    format!("Queue (front to rear): {}", spaced(queue.iter()))
}

pub fn bst_line(bst: &Bst) -> String {
    format!("Binary Search Tree (In-order): {}", spaced(bst.inorder()))
}

pub fn graph_lines(graph: &Graph) -> Vec<String> {
    std::iter::once("Graph (Adjacency List):".to_string())
        .chain(
            graph
                .traverse()
                .map(|(vertex, neighbors)| format!("Vertex {}: {}", vertex, chained(neighbors))),
        )
        .collect()
}

/// Visit order as `label from start: a b c`.
pub fn order_line(label: &str, start: i32, order: &[i32]) -> String {
    format!("{} from {}: {}", label, start, order.iter().join(" "))
}
