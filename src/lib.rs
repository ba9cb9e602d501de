//! # Bounded FIFO
//!
//! A bounded, non-overwriting ring buffer queue over caller-supplied bytes.
//! Elements have a fixed byte width chosen at runtime; the queue copies them
//! in and out but never looks inside.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `buffer`: The ring buffer core, its typed facade and the shared queue
//! - `config`: Queue geometry and validation
//! - `error`: Error types
//!
//! ## Quick Start
//!
//! ```
//! use bounded_fifo::{QueueError, RingBuffer};
//!
//! let mut storage = [0u8; 8];
//! let mut queue = RingBuffer::new(&mut storage[..], 2, 4)?;
//!
//! queue.enqueue(&1u32.to_le_bytes())?;
//! queue.enqueue(&2u32.to_le_bytes())?;
//! assert_eq!(queue.enqueue(&3u32.to_le_bytes()), Err(QueueError::Full));
//!
//! let mut out = [0u8; 4];
//! queue.dequeue(&mut out)?;
//! assert_eq!(u32::from_le_bytes(out), 1);
//! # Ok::<(), QueueError>(())
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{Element, QueueStats, RingBuffer, SharedQueue, TypedRingBuffer};
pub use config::{ConfigError, QueueConfig};
pub use error::{QueueError, QueueResult};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the process.
///
/// Installs `env_logger` at Info level (overridable through `RUST_LOG`).
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

// ============================================
// TESTS
// ============================================
