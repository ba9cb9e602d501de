//! # Typed Ring Buffer
//!
//! A thin wrapper that lets you enqueue `u32`s (or any [`Element`]) instead
//! of raw byte blocks. The element width comes from the type, so the
//! "wrong-sized slice" mistake cannot happen here.

use std::marker::PhantomData;

use super::element::Element;
use super::ring_buffer::RingBuffer;
use crate::error::QueueResult;

/// A [`RingBuffer`] whose elements are values of type `T`.
#[derive(Debug)]
pub struct TypedRingBuffer<T, S> {
    inner: RingBuffer<S>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S> TypedRingBuffer<T, S>
where
    T: Element,
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Initializes a typed queue of `capacity` elements over `storage`.
    ///
    /// ## Example
    /// ```
    /// # use bounded_fifo::buffer::TypedRingBuffer;
    /// let mut queue: TypedRingBuffer<u32, _> = TypedRingBuffer::new([0u8; 12], 3).unwrap();
    /// queue.enqueue(7).unwrap();
    /// assert_eq!(queue.dequeue(), Ok(7));
    /// ```
    pub fn new(storage: S, capacity: usize) -> QueueResult<Self> {
        Ok(Self {
            inner: RingBuffer::new(storage, capacity, T::SIZE)?,
            _marker: PhantomData,
        })
    }

    /// Adds `item` at the rear. Fails with `Full` when no slot is free.
    pub fn enqueue(&mut self, item: T) -> QueueResult<()> {
        let mut block = vec![0u8; T::SIZE];
        item.write_to(&mut block);
        self.inner.enqueue(&block)
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> QueueResult<T> {
        let mut block = vec![0u8; T::SIZE];
        self.inner.dequeue(&mut block)?;
        Ok(T::read_from(&block))
    }

    /// Returns the oldest element.
    pub fn peek_front(&self) -> QueueResult<T> {
        let mut block = vec![0u8; T::SIZE];
        self.inner.peek_front(&mut block)?;
        Ok(T::read_from(&block))
    }

    /// Returns the newest element.
    pub fn peek_rear(&self) -> QueueResult<T> {
        let mut block = vec![0u8; T::SIZE];
        self.inner.peek_rear(&mut block)?;
        Ok(T::read_from(&block))
    }

    /// Returns the element at logical `index` (0 = oldest).
    pub fn peek_by_index(&self, index: usize) -> QueueResult<T> {
        let mut block = vec![0u8; T::SIZE];
        self.inner.peek_by_index(index, &mut block)?;
        Ok(T::read_from(&block))
    }

    /// Reverses the logical order of the stored elements.
    pub fn reverse(&mut self) -> QueueResult<()> {
        self.inner.reverse()
    }

    /// Empties the queue and rewinds it to the start of storage.
    pub fn clear(&mut self) -> QueueResult<()> {
        self.inner.clear()
    }

    /// Returns all elements decoded, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.inner.iter().map(T::read_from)
    }

    /// Returns the underlying byte queue.
    pub fn as_bytes(&self) -> &RingBuffer<S> {
        &self.inner
    }

    /// Unwraps into the underlying byte queue.
    pub fn into_inner(self) -> RingBuffer<S> {
        self.inner
    }
}

impl<T, S> TypedRingBuffer<T, S> {
    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueueError;

    fn queue(capacity: usize) -> TypedRingBuffer<u32, Vec<u8>> {
        TypedRingBuffer::new(vec![0u8; capacity * 4], capacity).unwrap()
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut q = queue(5);
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 5);

        for i in 1..=5 {
            q.enqueue(i).unwrap();
            assert_eq!(q.peek_front(), Ok(1));
            assert_eq!(q.peek_rear(), Ok(i));
        }
        assert!(q.is_full());
        assert_eq!(q.enqueue(99), Err(QueueError::Full));
        assert_eq!(q.len(), 5);

        for expected in 1..=5 {
            assert_eq!(q.dequeue(), Ok(expected));
        }
        assert_eq!(q.len(), 0);
        assert_eq!(q.dequeue(), Err(QueueError::Empty));

        for i in 10..15 {
            q.enqueue(i).unwrap();
        }
        q.reverse().unwrap();
        let reversed: Vec<u32> = (0..5).map(|i| q.peek_by_index(i).unwrap()).collect();
        assert_eq!(reversed, vec![14, 13, 12, 11, 10]);
    }

    #[test]
    fn test_wide_elements() {
        let mut q: TypedRingBuffer<[u8; 16], _> = TypedRingBuffer::new([0u8; 32], 2).unwrap();
        let a = [0xabu8; 16];
        let mut b = [0u8; 16];
        b[15] = 1;

        q.enqueue(a).unwrap();
        q.enqueue(b).unwrap();
        assert_eq!(q.iter().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(q.dequeue(), Ok(a));
    }

    #[test]
    fn test_clear_and_into_inner() {
        let mut q = queue(2);
        q.enqueue(3).unwrap();
        q.enqueue(4).unwrap();
        q.clear().unwrap();
        assert!(q.is_empty());

        q.enqueue(8).unwrap();
        assert_eq!(q.as_bytes().rear_offset(), 4);
        let storage = q.into_inner().into_storage();
        assert_eq!(&storage[..4], &8u32.to_le_bytes());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result: QueueResult<TypedRingBuffer<u16, _>> = TypedRingBuffer::new([0u8; 4], 0);
        assert!(matches!(result, Err(QueueError::InvalidArgument(_))));
    }
}
