//! Min-priority queue backed by a binary heap.

use alloc::{collections::BinaryHeap, vec::Vec};
use core::{cmp::Reverse, fmt};

use super::{QueueError, priority_entry::PriorityEntry};


const PRIORITY_LOG_TARGET: &str = "fraktor::queue::priority";

/// Queue that always yields its smallest item first.
///
/// Insertion and removal are O(log n). Items comparing equal are yielded in
/// insertion order, as long as fewer than 2^64 items are pushed between two
/// calls to [`PriorityQueue::clear`].
pub struct PriorityQueue<T> {
  heap:     BinaryHeap<Reverse<PriorityEntry<T>>>,
  sequence: u64,
}

impl<T: Ord> PriorityQueue<T> {
  /// Target name used for emitted `tracing` events.
  pub const LOG_TARGET: &'static str = PRIORITY_LOG_TARGET;

  /// Creates an empty queue without allocating.
  #[must_use]
  pub const fn new() -> Self {
    Self { heap: BinaryHeap::new(), sequence: 0 }
  }

  /// Creates an empty queue with room for at least `capacity` items.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { heap: BinaryHeap::with_capacity(capacity), sequence: 0 }
  }

  /// Returns the number of queued items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.heap.len()
  }

  /// Indicates whether the queue holds no items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  /// Inserts an item.
  pub fn push(&mut self, item: T) {
    let entry = PriorityEntry::new(item, self.sequence);
    self.sequence = self.sequence.wrapping_add(1);
    self.heap.push(Reverse(entry));
  }

  /// Removes and returns the smallest item.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no items.
  pub fn pop(&mut self) -> Result<T, QueueError> {
    match self.heap.pop() {
      | Some(Reverse(entry)) => Ok(entry.into_item()),
      | None => Err(underflow("pop")),
    }
  }

  /// Returns the smallest item without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no items.
  pub fn peek(&self) -> Result<&T, QueueError> {
    match self.heap.peek() {
      | Some(Reverse(entry)) => Ok(entry.item()),
      | None => Err(underflow("peek")),
    }
  }

  /// Drops every queued item.
  pub fn clear(&mut self) {
    tracing::trace!(target: PRIORITY_LOG_TARGET, len = self.heap.len(), "clearing queue");
    self.heap.clear();
    self.sequence = 0;
  }

  /// Consumes the queue, returning its items in the order they would be popped.
  #[must_use]
  pub fn into_sorted_vec(self) -> Vec<T> {
    let mut entries: Vec<PriorityEntry<T>> = self.heap.into_iter().map(|Reverse(entry)| entry).collect();
    entries.sort_unstable();
    entries.into_iter().map(PriorityEntry::into_item).collect()
  }
}

fn underflow(operation: &'static str) -> QueueError {
  tracing::debug!(target: PRIORITY_LOG_TARGET, operation, "queue underflow");
  QueueError::Empty
}

impl<T: Ord> Default for PriorityQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let head = self.heap.peek().map(|Reverse(entry)| entry.item());
    f.debug_struct("PriorityQueue").field("len", &self.heap.len()).field("head", &head).finish()
  }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut queue = Self::new();
    queue.extend(iter);
    queue
  }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for item in iter {
      self.push(item);
    }
  }
}
