//! Construction settings for [`FifoQueue`](super::FifoQueue).


/// Configuration for [`FifoQueue`](super::FifoQueue).
///
/// The initial capacity only pre-allocates the ring buffer. The queue keeps
/// growing past it on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FifoQueueConfig {
  initial_capacity: usize,
}

impl FifoQueueConfig {
  /// Initial capacity used by [`FifoQueueConfig::new`].
  pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

  /// Creates a new configuration with defaults.
  #[must_use]
  pub const fn new() -> Self {
    Self { initial_capacity: Self::DEFAULT_INITIAL_CAPACITY }
  }

  /// Returns the number of slots allocated up front.
  #[must_use]
  pub const fn initial_capacity(&self) -> usize {
    self.initial_capacity
  }

  /// Updates the number of slots allocated up front.
  #[must_use]
  pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
    self.initial_capacity = initial_capacity;
    self
  }
}

impl Default for FifoQueueConfig {
  fn default() -> Self {
    Self::new()
  }
}
