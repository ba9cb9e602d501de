//! # Queue Buffer Module
//!
//! This module provides the bounded circular (ring) buffer and its wrappers.
//!
//! ## Plain English Explanation
//!
//! Imagine a lazy-susan with exactly N equal-sized spots.
//! Every time a new item arrives:
//! 1. It goes in the spot after the newest item
//! 2. If every spot is taken, the item is turned away (nothing is thrown out)
//! 3. Items are taken off in the order they were put on
//!
//! Three layers live here:
//! - [`RingBuffer`]: the core, over bytes you hand it
//! - [`TypedRingBuffer`]: the same thing, speaking in `u32`s (or any [`Element`])
//! - [`SharedQueue`]: owns its bytes, sits behind a lock, and can exist
//!   before it has been initialized

mod element;
mod ring_buffer;
mod typed;

pub use element::Element;
pub use ring_buffer::RingBuffer;
pub use typed::TypedRingBuffer;

use parking_lot::RwLock;

use crate::config::QueueConfig;
use crate::error::{QueueError, QueueResult};

// ============================================
// QUEUE STATISTICS
// ============================================

/// Counters for everything that happened to a [`SharedQueue`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueueStats {
    /// Elements accepted by enqueue
    pub enqueued: u64,
    /// Elements handed out by dequeue
    pub dequeued: u64,
    /// Enqueues turned away because the queue was full
    pub rejected_full: u64,
    /// Dequeues that found nothing
    pub rejected_empty: u64,
}

#[derive(Debug, Default)]
struct Inner {
    /// `None` until `initialize` succeeds
    ring: Option<RingBuffer<Vec<u8>>>,
    stats: QueueStats,
}

// ============================================
// SHARED QUEUE
// Thread-safe wrapper for our ring buffer
// ============================================

/// A thread-safe queue that owns its storage and can be shared across threads
///
/// ## Plain English Explanation
///
/// The ring buffer itself has no locks: two threads poking it at once would
/// corrupt the cursors. This wrapper puts the whole queue behind one lock,
/// so each operation happens entirely before or entirely after any other.
///
/// It also models the "not set up yet" state explicitly. Until
/// [`initialize`](Self::initialize) runs:
/// - every operation fails with [`QueueError::NullReference`]
/// - the read accessors return safe defaults (`len() == 0`,
///   `capacity() == 0`, `is_empty() == true`, `is_full() == false`)
///   because they have no way to report an error
#[derive(Debug, Default)]
pub struct SharedQueue {
    /// The ring buffer plus counters, protected by a read-write lock
    /// - Peeks and accessors take the read side
    /// - Anything that moves a cursor takes the write side
    inner: RwLock<Inner>,
}

impl SharedQueue {
    /// Creates a queue in the uninitialized state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and initializes a queue from a configuration.
    ///
    /// The configuration is validated first; the first problem found is
    /// returned as [`QueueError::InvalidArgument`].
    pub fn with_config(config: &QueueConfig) -> QueueResult<Self> {
        let queue = Self::new();
        queue.initialize_with_config(config)?;
        Ok(queue)
    }

    /// Allocates zeroed storage and (re)initializes the queue.
    ///
    /// The geometry must fit under
    /// [`DEFAULT_MAX_STORAGE_BYTES`](crate::config::DEFAULT_MAX_STORAGE_BYTES);
    /// use [`initialize_with_config`](Self::initialize_with_config) to raise
    /// the limit. Any previous contents and statistics are discarded. On
    /// failure the queue keeps whatever state it had before.
    pub fn initialize(&self, capacity: usize, element_size: usize) -> QueueResult<()> {
        self.initialize_with_config(&QueueConfig::new(capacity, element_size))
    }

    /// Validates `config`, then allocates storage and (re)initializes the queue.
    ///
    /// Nothing is allocated unless validation passes.
    pub fn initialize_with_config(&self, config: &QueueConfig) -> QueueResult<()> {
        if let Some(err) = config.validate().into_iter().next() {
            return Err(err.into());
        }

        let len = config
            .storage_len()
            .ok_or_else(|| QueueError::InvalidArgument("storage size overflows".to_string()))?;
        let ring = RingBuffer::new(vec![0u8; len], config.capacity, config.element_size)?;

        log::info!(
            "Initializing queue: {} elements of {} bytes = {} bytes of storage",
            config.capacity,
            config.element_size,
            len
        );

        let mut inner = self.inner.write();
        inner.ring = Some(ring);
        inner.stats = QueueStats::default();
        Ok(())
    }

    /// Adds one element at the rear.
    pub fn enqueue(&self, item: &[u8]) -> QueueResult<()> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        let ring = inner.ring.as_mut().ok_or(QueueError::NullReference)?;

        match ring.enqueue(item) {
            Ok(()) => {
                inner.stats.enqueued += 1;
                Ok(())
            }
            Err(QueueError::Full) => {
                inner.stats.rejected_full += 1;
                Err(QueueError::Full)
            }
            Err(e) => Err(e),
        }
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&self) -> QueueResult<Vec<u8>> {
        self.inner.write().dequeue_block(None)
    }

    /// Encodes `item` and adds it at the rear.
    ///
    /// Fails with [`QueueError::ElementSizeMismatch`] if `T` is not as wide
    /// as the queue's elements.
    pub fn enqueue_value<T: Element>(&self, item: T) -> QueueResult<()> {
        let mut block = vec![0u8; T::SIZE];
        item.write_to(&mut block);
        self.enqueue(&block)
    }

    /// Removes the oldest element and decodes it as `T`.
    ///
    /// The width check, removal and decode all happen under one lock, so a
    /// concurrent `initialize` can never hand this call a block of the wrong
    /// width. On a width mismatch nothing is removed.
    pub fn dequeue_value<T: Element>(&self) -> QueueResult<T> {
        let mut inner = self.inner.write();
        let block = inner.dequeue_block(Some(T::SIZE))?;
        Ok(T::read_from(&block))
    }

    /// Returns a copy of the oldest element.
    pub fn peek_front(&self) -> QueueResult<Vec<u8>> {
        self.read_block(|ring, out| ring.peek_front(out))
    }

    /// Returns a copy of the newest element.
    pub fn peek_rear(&self) -> QueueResult<Vec<u8>> {
        self.read_block(|ring, out| ring.peek_rear(out))
    }

    /// Returns a copy of the element at logical `index` (0 = oldest).
    pub fn peek_by_index(&self, index: usize) -> QueueResult<Vec<u8>> {
        self.read_block(|ring, out| ring.peek_by_index(index, out))
    }

    /// Decodes the element at logical `index` as `T`.
    pub fn peek_value<T: Element>(&self, index: usize) -> QueueResult<T> {
        let inner = self.inner.read();
        let ring = inner.ring.as_ref().ok_or(QueueError::NullReference)?;
        check_value_width(ring, T::SIZE)?;

        let mut block = vec![0u8; T::SIZE];
        ring.peek_by_index(index, &mut block)?;
        Ok(T::read_from(&block))
    }

    /// Reverses the logical order of the stored elements.
    pub fn reverse(&self) -> QueueResult<()> {
        let mut inner = self.inner.write();
        let ring = inner.ring.as_mut().ok_or(QueueError::NullReference)?;
        log::debug!("Reversing {} queued elements", ring.len());
        ring.reverse()
    }

    /// Clears all elements and rewinds the cursors to the start of storage.
    ///
    /// ## When Would You Use This?
    ///
    /// - Starting a new batch after the consumer has caught up
    /// - Dropping a backlog that is no longer relevant
    pub fn clear(&self) -> QueueResult<()> {
        let mut inner = self.inner.write();
        let ring = inner.ring.as_mut().ok_or(QueueError::NullReference)?;
        log::debug!("Clearing queue ({} elements dropped)", ring.len());
        ring.clear()
    }

    /// Takes a copy of every live element, oldest first.
    ///
    /// The queue itself is NOT modified. Returns an empty list when the
    /// queue is uninitialized.
    pub fn snapshot(&self) -> Vec<Vec<u8>> {
        let inner = self.inner.read();
        inner
            .ring
            .as_ref()
            .map(|ring| ring.iter().map(<[u8]>::to_vec).collect())
            .unwrap_or_default()
    }

    /// Runs `f` against the locked ring buffer.
    ///
    /// Returns `None` if the queue is uninitialized.
    pub fn with_buffer<R>(&self, f: impl FnOnce(&mut RingBuffer<Vec<u8>>) -> R) -> Option<R> {
        let mut inner = self.inner.write();
        inner.ring.as_mut().map(f)
    }

    /// Returns a copy of the current statistics.
    pub fn stats(&self) -> QueueStats {
        self.inner.read().stats.clone()
    }

    // ----------------------------------------
    // ACCESSORS
    // Defaults stand in when uninitialized
    // ----------------------------------------

    /// Returns true once `initialize` has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.inner.read().ring.is_some()
    }

    /// Number of live elements, or 0 when uninitialized.
    pub fn len(&self) -> usize {
        self.read_or(0, RingBuffer::len)
    }

    /// Maximum number of elements, or 0 when uninitialized.
    pub fn capacity(&self) -> usize {
        self.read_or(0, RingBuffer::capacity)
    }

    /// Element width in bytes, or 0 when uninitialized.
    pub fn element_size(&self) -> usize {
        self.read_or(0, RingBuffer::element_size)
    }

    /// True when no slot is free; false when uninitialized.
    pub fn is_full(&self) -> bool {
        self.read_or(false, RingBuffer::is_full)
    }

    /// True when nothing is stored; also true when uninitialized.
    pub fn is_empty(&self) -> bool {
        self.read_or(true, RingBuffer::is_empty)
    }

    /// Returns how full the queue is (0.0 = empty, 1.0 = full)
    pub fn fill_percentage(&self) -> f32 {
        let inner = self.inner.read();
        match inner.ring.as_ref() {
            Some(ring) => ring.len() as f32 / ring.capacity() as f32,
            None => 0.0,
        }
    }

    fn read_or<R>(&self, default: R, f: impl FnOnce(&RingBuffer<Vec<u8>>) -> R) -> R {
        self.inner.read().ring.as_ref().map_or(default, f)
    }

    fn read_block(
        &self,
        f: impl FnOnce(&RingBuffer<Vec<u8>>, &mut [u8]) -> QueueResult<()>,
    ) -> QueueResult<Vec<u8>> {
        let inner = self.inner.read();
        let ring = inner.ring.as_ref().ok_or(QueueError::NullReference)?;
        let mut out = vec![0u8; ring.element_size()];
        f(ring, &mut out)?;
        Ok(out)
    }
}

impl Inner {
    /// Pops the front block. With `width` set, refuses without popping
    /// unless the elements are exactly that wide.
    fn dequeue_block(&mut self, width: Option<usize>) -> QueueResult<Vec<u8>> {
        let ring = self.ring.as_mut().ok_or(QueueError::NullReference)?;
        if let Some(width) = width {
            check_value_width(ring, width)?;
        }

        let mut out = vec![0u8; ring.element_size()];
        match ring.dequeue(&mut out) {
            Ok(()) => {
                self.stats.dequeued += 1;
                Ok(out)
            }
            Err(QueueError::Empty) => {
                self.stats.rejected_empty += 1;
                Err(QueueError::Empty)
            }
            Err(e) => Err(e),
        }
    }
}

fn check_value_width(ring: &RingBuffer<Vec<u8>>, width: usize) -> QueueResult<()> {
    if ring.element_size() != width {
        return Err(QueueError::ElementSizeMismatch {
            expected: ring.element_size(),
            actual: width,
        });
    }
    Ok(())
}

// ============================================
// TESTS
// ============================================
