//! Specialized data structures
//!
//! - **[`ring_buffer`]**: fixed-size FIFO buffer with evict-on-overflow, used
//!   as the backing store of the diagnostic log history
//!
//! ## Usage
//!
//! ```rust
//! use anamnese_common::collections::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(10);
//! buffer.push(1);
//! assert_eq!(buffer.len(), 1);
//! ```

pub mod ring_buffer;

pub use ring_buffer::RingBuffer;
