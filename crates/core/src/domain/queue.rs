// Order Queue Domain Model

use crate::domain::OrderSummary;
use std::collections::VecDeque;

/// In-memory FIFO of order summaries.
///
/// Unbounded and not synchronized: it is owned by exactly one task
/// (see `application::order_queue`). Elements leave only from the head.
#[derive(Debug, Default)]
pub struct OrderQueue {
    items: VecDeque<OrderSummary>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail. Never rejects.
    pub fn enqueue(&mut self, summary: OrderSummary) {
        self.items.push_back(summary);
    }

    /// Remove the head, or `None` when empty
    pub fn dequeue(&mut self) -> Option<OrderSummary> {
        self.items.pop_front()
    }

    /// Head without removing it, or `None` when empty
    pub fn peek(&self) -> Option<&OrderSummary> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Head-to-tail copy of every element
    pub fn snapshot(&self) -> Vec<OrderSummary> {
        self.items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn summary(id: i64) -> OrderSummary {
        OrderSummary {
            id,
            customer_name: Some(format!("customer-{}", id)),
            description: None,
            value: Decimal::new(id * 100, 2),
            created_at: id * 1000,
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = OrderQueue::new();
        for id in 1..=50 {
            queue.enqueue(summary(id));
        }

        let drained: Vec<i64> = std::iter::from_fn(|| queue.dequeue()).map(|s| s.id).collect();
        assert_eq!(drained, (1..=50).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_empty_queue_signals() {
        let mut queue = OrderQueue::new();

        assert!(queue.dequeue().is_none());
        assert!(queue.peek().is_none());
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_size_after_enqueues_and_dequeues() {
        let mut queue = OrderQueue::new();
        for id in 0..10 {
            queue.enqueue(summary(id));
        }
        for _ in 0..4 {
            queue.dequeue();
        }

        assert_eq!(queue.len(), 6);
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = OrderQueue::new();
        queue.enqueue(summary(1));
        queue.enqueue(summary(2));

        assert_eq!(queue.peek().map(|s| s.id), Some(1));
        assert_eq!(queue.peek().map(|s| s.id), Some(1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue().map(|s| s.id), Some(1));
        assert_eq!(queue.peek().map(|s| s.id), Some(2));
    }

    #[test]
    fn test_snapshot_is_head_to_tail_and_non_mutating() {
        let mut queue = OrderQueue::new();
        for id in [3, 1, 2] {
            queue.enqueue(summary(id));
        }

        let before = queue.len();
        let snapshot = queue.snapshot();
        assert_eq!(queue.len(), before);
        assert_eq!(snapshot.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_interleaved_operations_keep_fifo() {
        let mut queue = OrderQueue::new();
        queue.enqueue(summary(1));
        queue.enqueue(summary(2));
        assert_eq!(queue.dequeue().map(|s| s.id), Some(1));
        queue.enqueue(summary(3));
        assert_eq!(queue.dequeue().map(|s| s.id), Some(2));
        assert_eq!(queue.dequeue().map(|s| s.id), Some(3));
        assert!(queue.dequeue().is_none());
    }
}
