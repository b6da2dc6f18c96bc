//! Queue error definitions.


/// Errors produced by queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
  /// The queue contains no elements to remove or inspect.
  #[error("queue is empty")]
  Empty,
}
