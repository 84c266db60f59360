//! Tests for array, linked list, stack and queue

use rstest::rstest;

use rsds::domain::{DomainError, FixedArray, LinkedList, Queue, Stack};

#[test]
fn given_sample_values_when_pushing_stack_then_iterates_top_to_bottom() {
    let mut stack = Stack::with_capacity(100).unwrap();
    for v in [10, 20, 30, 40, 50] {
        stack.push(v).unwrap();
    }

    assert_eq!(stack.iter().collect::<Vec<_>>(), vec![50, 40, 30, 20, 10]);
    assert_eq!(stack.peek(), Some(50));
    assert_eq!(stack.pop(), Some(50));
    assert_eq!(stack.len(), 4);
}

#[test]
fn given_sample_values_when_enqueueing_then_dequeues_in_arrival_order() {
    let mut queue = Queue::with_capacity(100).unwrap();
    for v in [10, 20, 30, 40, 50] {
        queue.enqueue(v).unwrap();
    }

    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![10, 20, 30, 40, 50]);
    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![20, 30, 40, 50]);
}

#[test]
fn given_queue_cycled_many_times_when_iterating_then_stays_consistent() {
    let mut queue = Queue::with_capacity(3).unwrap();
    for round in 0..10 {
        queue.enqueue(round).unwrap();
        queue.enqueue(round + 100).unwrap();
        assert_eq!(queue.dequeue(), Some(round));
        assert_eq!(queue.dequeue(), Some(round + 100));
    }
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.capacity(), 3);
}

#[rstest]
#[case(1)]
#[case(5)]
fn given_full_buffers_when_adding_then_overflow_is_reported(#[case] capacity: usize) {
    let mut array = FixedArray::with_capacity(capacity).unwrap();
    let mut stack = Stack::with_capacity(capacity).unwrap();
    let mut queue = Queue::with_capacity(capacity).unwrap();
    for v in 0..capacity as i32 {
        array.push(v).unwrap();
        stack.push(v).unwrap();
        queue.enqueue(v).unwrap();
    }

    assert_eq!(
        array.push(-1),
        Err(DomainError::CapacityExceeded {
            structure: "array",
            capacity
        })
    );
    assert_eq!(
        stack.push(-1),
        Err(DomainError::CapacityExceeded {
            structure: "stack",
            capacity
        })
    );
    assert_eq!(
        queue.enqueue(-1),
        Err(DomainError::CapacityExceeded {
            structure: "queue",
            capacity
        })
    );
    assert_eq!(array.len(), capacity);
    assert_eq!(stack.len(), capacity);
    assert_eq!(queue.len(), capacity);
}

#[test]
fn given_zero_capacity_when_creating_buffers_then_rejected() {
    assert!(FixedArray::with_capacity(0).is_err());
    assert!(Stack::with_capacity(0).is_err());
    assert_eq!(
        Queue::with_capacity(0),
        Err(DomainError::ZeroCapacity { structure: "queue" })
    );
}

#[test]
fn given_empty_linked_list_when_appending_then_head_is_first_value() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.append(10);
    list.append(20);

    assert!(!list.is_empty());
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![10, 20]);
}
