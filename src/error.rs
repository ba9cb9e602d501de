//! # Error Types Module
//!
//! This module defines all the error types used by the queue.
//!
//! ## Plain English Explanation
//!
//! Every queue operation either works or tells you exactly why it didn't.
//! Nothing panics and nothing is half-done: if an operation fails, the queue
//! looks exactly like it did before you called it.
//!
//! - "Full: there's no room, nothing was written"
//! - "Empty: there's nothing to read"
//! - "IndexOutOfRange: you asked for item 7 but only 3 are stored"

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// QUEUE ERRORS
// ============================================

/// The error type for every queue operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Bad geometry or storage handed to initialize
    ///
    /// ## Examples
    /// - Capacity of zero
    /// - Element size of zero
    /// - Storage shorter than `capacity * element_size`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The queue was used before it was initialized
    ///
    /// ## What This Means
    /// A [`SharedQueue`](crate::buffer::SharedQueue) starts out empty-handed
    /// and needs `initialize` before it can hold anything.
    #[error("Queue has not been initialized")]
    NullReference,

    /// Enqueue on a full queue
    ///
    /// ## What This Means
    /// Nothing was overwritten. The new item was simply turned away.
    #[error("Queue is full")]
    Full,

    /// Dequeue or peek on an empty queue
    #[error("Queue is empty")]
    Empty,

    /// Peek by index past the last live element
    #[error("Index {index} out of range for queue holding {count} elements")]
    IndexOutOfRange {
        /// Requested logical index (0 = oldest)
        index: usize,
        /// Number of live elements at the time of the call
        count: usize,
    },

    /// An item or output slice is not exactly one element wide
    #[error("Element size mismatch: expected {expected} bytes, got {actual}")]
    ElementSizeMismatch {
        /// The queue's element size
        expected: usize,
        /// Length of the slice that was passed in
        actual: usize,
    },
}

impl From<ConfigError> for QueueError {
    fn from(err: ConfigError) -> Self {
        QueueError::InvalidArgument(err.to_string())
    }
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses QueueError
///
/// ## Plain English
///
/// This is a shorthand. Instead of writing:
/// ```text
/// fn do_something() -> Result<Value, QueueError>
/// ```
/// We can write:
/// ```text
/// fn do_something() -> QueueResult<Value>
/// ```
pub type QueueResult<T> = Result<T, QueueError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QueueError::IndexOutOfRange { index: 7, count: 3 };
        let message = format!("{}", err);
        assert!(message.contains("7"));
        assert!(message.contains("3"));

        assert_eq!(QueueError::Full.to_string(), "Queue is full");
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = ConfigError::ZeroCapacity;
        let queue_err: QueueError = config_err.into();

        match queue_err {
            QueueError::InvalidArgument(msg) => assert!(msg.contains("capacity")),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }
}
