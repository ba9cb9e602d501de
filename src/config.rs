//! # Configuration Module
//!
//! This module describes the shape of a queue before any memory is handed
//! over: how many elements it holds and how wide each one is.
//!
//! ## Plain English Explanation
//!
//! Before building a shelf you decide how many slots it has and how big each
//! slot is. This module holds those two numbers, checks they make sense, and
//! tells you how many bytes of storage the shelf needs.

use thiserror::Error;

use crate::buffer::Element;

/// Default upper bound on backing storage: 1 MiB
pub const DEFAULT_MAX_STORAGE_BYTES: usize = 1024 * 1024;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// Geometry of a queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueueConfig {
    /// Maximum number of elements
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - Default: 16
    pub capacity: usize,

    /// Width of one element in bytes
    ///
    /// ## Plain English
    /// A `u32` is 4 bytes, a `u8` is 1 byte. The queue never looks inside
    /// an element; it only moves this many bytes at a time.
    pub element_size: usize,

    /// Refuse geometries whose storage would exceed this many bytes
    pub max_storage_bytes: usize,
}

impl QueueConfig {
    /// Creates a configuration with explicit geometry and the default size limit.
    pub fn new(capacity: usize, element_size: usize) -> Self {
        Self {
            capacity,
            element_size,
            ..Self::default()
        }
    }

    /// Creates a configuration sized for elements of type `T`.
    ///
    /// ## Example
    /// ```
    /// # use bounded_fifo::QueueConfig;
    /// let config = QueueConfig::for_type::<u32>(5);
    /// assert_eq!(config.element_size, 4);
    /// assert_eq!(config.storage_len(), Some(20));
    /// ```
    pub fn for_type<T: Element>(capacity: usize) -> Self {
        Self::new(capacity, T::SIZE)
    }

    /// Creates a configuration for a plain byte queue.
    pub fn bytes(capacity: usize) -> Self {
        Self::new(capacity, 1)
    }

    /// Overrides the storage size limit.
    pub fn with_max_storage_bytes(mut self, max_storage_bytes: usize) -> Self {
        self.max_storage_bytes = max_storage_bytes;
        self
    }

    /// Number of bytes of storage this geometry needs.
    ///
    /// Returns `None` if `capacity * element_size` overflows.
    pub fn storage_len(&self) -> Option<usize> {
        self.capacity.checked_mul(self.element_size)
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// ## Plain English
    /// Makes sure all settings are within reasonable bounds.
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity == 0 {
            errors.push(ConfigError::ZeroCapacity);
        }
        if self.element_size == 0 {
            errors.push(ConfigError::ZeroElementSize);
        }

        match self.storage_len() {
            None => errors.push(ConfigError::StorageOverflow {
                capacity: self.capacity,
                element_size: self.element_size,
            }),
            Some(len) if len > self.max_storage_bytes => {
                errors.push(ConfigError::StorageTooLarge {
                    requested: len,
                    limit: self.max_storage_bytes,
                });
            }
            Some(_) => {}
        }

        errors
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            capacity: 16,
            element_size: 4,
            max_storage_bytes: DEFAULT_MAX_STORAGE_BYTES,
        }
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Capacity must be at least one element
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// Element size must be at least one byte
    #[error("element size must be greater than zero")]
    ZeroElementSize,

    /// `capacity * element_size` does not fit in `usize`
    #[error("storage size overflows: {capacity} elements of {element_size} bytes")]
    StorageOverflow { capacity: usize, element_size: usize },

    /// Storage would exceed the configured limit
    #[error("storage of {requested} bytes exceeds limit of {limit} bytes")]
    StorageTooLarge { requested: usize, limit: usize },
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QueueConfig::default();

        assert_eq!(config.capacity, 16);
        assert_eq!(config.element_size, 4);
        assert_eq!(config.storage_len(), Some(64));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_presets() {
        assert_eq!(QueueConfig::bytes(8).storage_len(), Some(8));
        assert_eq!(QueueConfig::for_type::<u64>(3).element_size, 8);
        assert_eq!(QueueConfig::for_type::<[u8; 16]>(2).storage_len(), Some(32));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = QueueConfig::default();

        config.capacity = 0;
        assert!(config.validate().contains(&ConfigError::ZeroCapacity));

        config.capacity = 4;
        config.element_size = 0;
        assert!(config.validate().contains(&ConfigError::ZeroElementSize));

        config.element_size = 4;
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_storage_limits() {
        let config = QueueConfig::new(usize::MAX, 2);
        assert!(matches!(
            config.validate().as_slice(),
            [ConfigError::StorageOverflow { .. }]
        ));

        let config = QueueConfig::new(100, 4).with_max_storage_bytes(64);
        assert_eq!(
            config.validate(),
            vec![ConfigError::StorageTooLarge {
                requested: 400,
                limit: 64
            }]
        );
    }
}
