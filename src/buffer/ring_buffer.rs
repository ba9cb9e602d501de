//! # Ring Buffer Implementation
//!
//! A fixed-size circular FIFO over caller-supplied bytes that refuses new
//! elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots, all the same size.
//! Cars enter at the "rear" marker and leave at the "front" marker, and both
//! markers go around the track. When every spot is taken, new cars are
//! turned away at the gate: nobody gets towed.
//!
//! ## Layout
//!
//! ```text
//! storage:  [ slot 0 | slot 1 | slot 2 | slot 3 | slot 4 ]
//!                      ^front            ^rear
//!                      oldest            next free slot
//! ```
//!
//! `front` and `rear` are byte offsets, always a multiple of the element
//! size. When the queue is empty *and* when it is full they point at the
//! same slot, so `count` is the only thing that tells the two apart.

use crate::config::QueueConfig;
use crate::error::{QueueError, QueueResult};

/// A bounded ring buffer of fixed-width byte elements.
///
/// ## Properties
/// - Fixed capacity and element width (chosen at runtime, never change)
/// - O(1) enqueue, dequeue and indexed peek
/// - Rejects enqueue when full instead of overwriting
/// - Never allocates: all elements live in `storage`
///
/// `S` is whatever owns the bytes: a borrowed `&mut [u8]`, an array, or a
/// `Vec<u8>`. The buffer only touches the first `capacity * element_size`
/// bytes of it.
#[derive(Debug)]
pub struct RingBuffer<S> {
    /// Caller-supplied backing bytes
    storage: S,

    /// Maximum number of elements
    capacity: usize,

    /// Width of one element in bytes
    element_size: usize,

    /// `capacity * element_size`; every offset wraps at this value
    region_len: usize,

    /// Byte offset of the oldest element
    front: usize,

    /// Byte offset of the next free slot
    rear: usize,

    /// Number of live elements
    count: usize,
}

impl<S> RingBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Initializes a ring buffer over `storage`.
    ///
    /// Fails with [`QueueError::InvalidArgument`] if `capacity` or
    /// `element_size` is zero, if their product overflows, or if `storage`
    /// is shorter than `capacity * element_size` bytes.
    ///
    /// ## Example
    /// ```
    /// # use bounded_fifo::buffer::RingBuffer;
    /// let mut backing = [0u8; 20];
    /// let buffer = RingBuffer::new(&mut backing[..], 5, 4).unwrap();
    /// assert_eq!(buffer.capacity(), 5);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(storage: S, capacity: usize, element_size: usize) -> QueueResult<Self> {
        let geometry = QueueConfig::new(capacity, element_size).with_max_storage_bytes(usize::MAX);
        if let Some(err) = geometry.validate().into_iter().next() {
            return Err(err.into());
        }

        // validate() has already rejected overflow
        let region_len = capacity * element_size;
        let available = storage.as_ref().len();
        if available < region_len {
            return Err(QueueError::InvalidArgument(format!(
                "storage holds {} bytes but {} elements of {} bytes need {}",
                available, capacity, element_size, region_len
            )));
        }

        Ok(Self {
            storage,
            capacity,
            element_size,
            region_len,
            front: 0,
            rear: 0,
            count: 0,
        })
    }

    /// Copies `item` into the rear slot.
    ///
    /// Fails with [`QueueError::Full`] when every slot is taken. Nothing is
    /// overwritten in that case.
    pub fn enqueue(&mut self, item: &[u8]) -> QueueResult<()> {
        self.check_width(item.len())?;
        if self.is_full() {
            return Err(QueueError::Full);
        }

        let rear = self.rear;
        self.slot_mut(rear).copy_from_slice(item);
        self.rear = self.advance(rear);
        self.count += 1;
        Ok(())
    }

    /// Copies the front element into `out` and removes it.
    pub fn dequeue(&mut self, out: &mut [u8]) -> QueueResult<()> {
        self.check_width(out.len())?;
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        out.copy_from_slice(self.slot(self.front));
        self.front = self.advance(self.front);
        self.count -= 1;
        Ok(())
    }

    /// Copies the oldest element into `out` without removing it.
    pub fn peek_front(&self, out: &mut [u8]) -> QueueResult<()> {
        self.check_width(out.len())?;
        let block = self.front().ok_or(QueueError::Empty)?;
        out.copy_from_slice(block);
        Ok(())
    }

    /// Copies the most recently enqueued element into `out`.
    pub fn peek_rear(&self, out: &mut [u8]) -> QueueResult<()> {
        self.check_width(out.len())?;
        let block = self.rear().ok_or(QueueError::Empty)?;
        out.copy_from_slice(block);
        Ok(())
    }

    /// Copies the element `index` places behind the front into `out`.
    ///
    /// Index 0 is the oldest element. Fails with
    /// [`QueueError::IndexOutOfRange`] if `index >= len()`.
    pub fn peek_by_index(&self, index: usize, out: &mut [u8]) -> QueueResult<()> {
        self.check_width(out.len())?;
        let block = self.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            count: self.count,
        })?;
        out.copy_from_slice(block);
        Ok(())
    }

    /// Reverses the logical order of the live elements in place.
    ///
    /// Element blocks are swapped pairwise from both ends toward the middle.
    /// `front_offset` and `rear_offset` do not move, so afterwards the
    /// element that was newest is the next one dequeued.
    pub fn reverse(&mut self) -> QueueResult<()> {
        if self.count <= 1 {
            return Ok(());
        }

        let (mut i, mut j) = (0, self.count - 1);
        while i < j {
            let a = self.physical_offset(i);
            let b = self.physical_offset(j);
            self.swap_slots(a, b);
            i += 1;
            j -= 1;
        }
        Ok(())
    }

    /// Empties the queue and rewinds both cursors to the start of storage.
    ///
    /// The stored bytes are left as they are; they are simply no longer live.
    pub fn clear(&mut self) -> QueueResult<()> {
        self.front = 0;
        self.rear = 0;
        self.count = 0;
        Ok(())
    }

    // ----------------------------------------
    // BORROWING ACCESS
    // ----------------------------------------

    /// Returns the oldest element without removing it.
    pub fn front(&self) -> Option<&[u8]> {
        (!self.is_empty()).then(|| self.slot(self.front))
    }

    /// Returns the newest element without removing it.
    pub fn rear(&self) -> Option<&[u8]> {
        if self.is_empty() {
            return None;
        }
        let last = if self.rear == 0 {
            (self.capacity - 1) * self.element_size
        } else {
            self.rear - self.element_size
        };
        Some(self.slot(last))
    }

    /// Returns the element at logical `index` (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        (index < self.count).then(|| self.slot(self.physical_offset(index)))
    }

    /// Returns an iterator over all live elements (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.count).map(move |index| self.slot(self.physical_offset(index)))
    }

    /// Read-only view of the active storage region, live or not.
    pub fn storage(&self) -> &[u8] {
        &self.storage.as_ref()[..self.region_len]
    }

    // ----------------------------------------
    // INTERNALS
    // ----------------------------------------

    fn check_width(&self, len: usize) -> QueueResult<()> {
        if len != self.element_size {
            return Err(QueueError::ElementSizeMismatch {
                expected: self.element_size,
                actual: len,
            });
        }
        Ok(())
    }

    /// Byte offset of logical `index`, wrapped into the storage region.
    fn physical_offset(&self, index: usize) -> usize {
        (self.front + index * self.element_size) % self.region_len
    }

    /// Next slot after `offset`, wrapping to 0 at the end of storage.
    fn advance(&self, offset: usize) -> usize {
        let next = offset + self.element_size;
        if next >= self.region_len {
            0
        } else {
            next
        }
    }

    // Every element read and write goes through these two. Offsets are
    // multiples of element_size below region_len, so a slot never straddles
    // the end of storage.
    fn slot(&self, offset: usize) -> &[u8] {
        &self.storage.as_ref()[offset..offset + self.element_size]
    }

    fn slot_mut(&mut self, offset: usize) -> &mut [u8] {
        let width = self.element_size;
        &mut self.storage.as_mut()[offset..offset + width]
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let width = self.element_size;
        let region = &mut self.storage.as_mut()[..self.region_len];
        let (head, tail) = region.split_at_mut(hi);
        head[lo..lo + width].swap_with_slice(&mut tail[..width]);
    }
}

impl<S> RingBuffer<S> {
    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Byte offset of the oldest element.
    pub fn front_offset(&self) -> usize {
        self.front
    }

    /// Byte offset of the next free slot.
    pub fn rear_offset(&self) -> usize {
        self.rear
    }

    /// Gives the backing storage back to the caller.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

// ============================================
// TESTS
// ============================================
