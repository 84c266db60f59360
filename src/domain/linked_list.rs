//! Singly linked list with owned nodes.

use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListNode {
    value: i32,
    next: Option<Box<ListNode>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks to the tail and links a new node there.
    #[instrument(level = "trace", skip(self))]
    pub fn append(&mut self, value: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    #[instrument(level = "trace", skip(self))]
    pub fn push_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for LinkedList {
    // Unlink iteratively; the default drop recurses once per node
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl Extend<i32> for LinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

/// Head-to-tail iterator.
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.value)
    }
}
