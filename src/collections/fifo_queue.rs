//! First-in-first-out queue backed by a ring buffer.

use alloc::collections::{VecDeque, vec_deque};
use core::fmt;

use super::{FifoQueueConfig, QueueError};


const FIFO_LOG_TARGET: &str = "fraktor::queue::fifo";

/// Unbounded first-in-first-out queue.
///
/// Items are appended at the tail and removed from the head. Both ends are
/// O(1) because the storage is a [`VecDeque`] ring buffer. Removing or
/// inspecting the head of an empty queue yields [`QueueError::Empty`] and
/// leaves the queue untouched.
#[derive(Clone, PartialEq, Eq)]
pub struct FifoQueue<T> {
  items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
  /// Target name used for emitted `tracing` events.
  pub const LOG_TARGET: &'static str = FIFO_LOG_TARGET;

  /// Creates an empty queue without allocating.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: VecDeque::new() }
  }

  /// Creates an empty queue using the provided configuration.
  #[must_use]
  pub fn with_config(config: FifoQueueConfig) -> Self {
    Self::with_capacity(config.initial_capacity())
  }

  /// Creates an empty queue with room for at least `capacity` items.
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self { items: VecDeque::with_capacity(capacity) }
  }

  /// Indicates whether the queue holds no items.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Returns the number of queued items.
  #[must_use]
  pub fn size(&self) -> usize {
    self.items.len()
  }

  /// Returns the number of queued items.
  #[must_use]
  pub fn len(&self) -> usize {
    self.size()
  }

  /// Returns the number of items the queue can hold without reallocating.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.items.capacity()
  }

  /// Appends an item at the tail.
  pub fn enqueue(&mut self, item: T) {
    self.items.push_back(item);
  }

  /// Removes and returns the item at the head.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no items.
  pub fn dequeue(&mut self) -> Result<T, QueueError> {
    self.items.pop_front().ok_or_else(|| underflow("dequeue"))
  }

  /// Returns the item at the head without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no items.
  pub fn peek(&self) -> Result<&T, QueueError> {
    self.items.front().ok_or_else(|| underflow("peek"))
  }

  /// Returns the item at the tail without removing it.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no items.
  pub fn peek_back(&self) -> Result<&T, QueueError> {
    self.items.back().ok_or_else(|| underflow("peek_back"))
  }

  /// Removes the head item, returning `None` on an empty queue.
  pub fn try_dequeue(&mut self) -> Option<T> {
    self.items.pop_front()
  }

  /// Returns the head item, or `None` on an empty queue.
  #[must_use]
  pub fn try_peek(&self) -> Option<&T> {
    self.items.front()
  }

  /// Drops every queued item.
  pub fn clear(&mut self) {
    tracing::trace!(target: FIFO_LOG_TARGET, len = self.items.len(), "clearing queue");
    self.items.clear();
  }

  /// Iterates over the items from head to tail.
  #[must_use]
  pub fn iter(&self) -> vec_deque::Iter<'_, T> {
    self.items.iter()
  }

  /// Removes every item, yielding them from head to tail.
  pub fn drain(&mut self) -> vec_deque::Drain<'_, T> {
    tracing::trace!(target: FIFO_LOG_TARGET, len = self.items.len(), "draining queue");
    self.items.drain(..)
  }
}

fn underflow(operation: &'static str) -> QueueError {
  tracing::debug!(target: FIFO_LOG_TARGET, operation, "queue underflow");
  QueueError::Empty
}

impl<T> Default for FifoQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: fmt::Debug> fmt::Debug for FifoQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FifoQueue").field("items", &self.items).finish()
  }
}

impl<T: fmt::Debug> fmt::Display for FifoQueue<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("FifoQueue(")?;
    f.debug_list().entries(self.items.iter()).finish()?;
    f.write_str(")")
  }
}

impl<T> FromIterator<T> for FifoQueue<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self { items: iter.into_iter().collect() }
  }
}

impl<T> Extend<T> for FifoQueue<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.items.extend(iter);
  }
}

impl<T> IntoIterator for FifoQueue<T> {
  type IntoIter = vec_deque::IntoIter<T>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.items.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
  type IntoIter = vec_deque::Iter<'a, T>;
  type Item = &'a T;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}
