#![deny(missing_docs)]
#![cfg_attr(not(test), no_std)]

//! FIFO and priority queue collections for the fraktor utilities.
//!
//! [`FifoQueue`] wraps a ring buffer and hands elements back in insertion order.
//! [`PriorityQueue`] hands back the smallest element first. Both report underflow
//! through [`QueueError::Empty`] instead of panicking.

extern crate alloc;

pub mod collections;

pub use collections::{FifoQueue, FifoQueueConfig, PriorityQueue, QueueError};
