//! Queue collections.

mod fifo_queue;
mod fifo_queue_config;
mod priority_entry;
mod priority_queue;
mod queue_error;
#[cfg(test)]
mod recording_subscriber;

pub use fifo_queue::FifoQueue;
pub use fifo_queue_config::FifoQueueConfig;
pub use priority_queue::PriorityQueue;
pub use queue_error::QueueError;
