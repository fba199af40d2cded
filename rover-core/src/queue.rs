//! Bounded Command Queue
//!
//! Fixed-capacity ring buffer between the UART receive interrupt (the only
//! producer) and the brain task (the only consumer).
//!
//! # Access Pattern
//! Every operation runs inside `critical_section::with`, which makes each call
//! indivisible with respect to the others, including the overflow reset that
//! the producer performs on the consumer's end of the buffer. The sections are
//! a handful of loads and stores long, so taking one from interrupt context is
//! fine. Slot data is written before the new length is published with release
//! ordering and read after the length is observed with acquire ordering.
//!
//! Nothing here blocks or allocates: a full queue is reported, never waited on.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// Queue operation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// No free slot, the byte was not stored
    Full,
    /// Nothing to dequeue
    Empty,
}

/// How a received byte ended up in the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Enqueued {
    /// Stored behind the bytes already waiting
    Queued,
    /// The queue was full; its contents were discarded and the byte stored alone
    AfterOverflow,
}

/// Single-producer single-consumer byte queue with capacity `N`
pub struct CommandQueue<const N: usize> {
    slots: UnsafeCell<[u8; N]>,
    /// Next slot to read
    head: AtomicUsize,
    /// Next slot to write
    tail: AtomicUsize,
    len: AtomicUsize,
    overflows: AtomicU32,
}

// Safety: `slots` is only touched inside a critical section, and the indices
// guarantee the producer and consumer never address the same slot at once.
unsafe impl<const N: usize> Sync for CommandQueue<N> {}

impl<const N: usize> Default for CommandQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CommandQueue<N> {
    pub const fn new() -> Self {
        assert!(N > 0, "command queue needs at least one slot");
        Self {
            slots: UnsafeCell::new([0; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            len: AtomicUsize::new(0),
            overflows: AtomicU32::new(0),
        }
    }

    /// Empties the queue, discarding any buffered bytes
    pub fn init(&self) {
        critical_section::with(|_| self.reset_locked());
    }

    /// Appends a byte, or reports `Full` without touching the buffer
    pub fn enqueue(&self, byte: u8) -> Result<(), QueueError> {
        critical_section::with(|_| self.push_locked(byte))
    }

    /// Removes and returns the oldest byte
    pub fn dequeue(&self) -> Result<u8, QueueError> {
        critical_section::with(|_| {
            let len = self.len.load(Ordering::Acquire);
            if len == 0 {
                return Err(QueueError::Empty);
            }

            let head = self.head.load(Ordering::Relaxed);
            // Safety: inside the critical section, and `head` indexes an occupied slot
            let byte = unsafe { (*self.slots.get())[head] };
            self.head.store((head + 1) % N, Ordering::Relaxed);
            self.len.store(len - 1, Ordering::Release);

            Ok(byte)
        })
    }

    /// Stores a received byte, dropping everything already buffered if there is
    /// no room for it.
    ///
    /// The check, the reset and the store happen in one critical section, so a
    /// dequeue can never observe the queue half way through the reset.
    pub fn enqueue_or_reset(&self, byte: u8) -> Enqueued {
        critical_section::with(|_| {
            if self.push_locked(byte).is_ok() {
                return Enqueued::Queued;
            }

            self.reset_locked();
            // NOTE: load/store instead of fetch_add, we are inside the critical section anyway
            let overflows = self.overflows.load(Ordering::Relaxed);
            self.overflows
                .store(overflows.wrapping_add(1), Ordering::Relaxed);
            // cannot fail, the queue is empty and has at least one slot
            let _ = self.push_locked(byte);

            Enqueued::AfterOverflow
        })
    }

    /// Number of bytes waiting
    pub fn size(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn is_full(&self) -> bool {
        self.size() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// How many times the queue has been reset because it ran full
    pub fn overflow_count(&self) -> u32 {
        self.overflows.load(Ordering::Relaxed)
    }

    fn push_locked(&self, byte: u8) -> Result<(), QueueError> {
        let len = self.len.load(Ordering::Acquire);
        if len == N {
            return Err(QueueError::Full);
        }

        let tail = self.tail.load(Ordering::Relaxed);
        // Safety: inside the critical section, and `tail` indexes a free slot
        unsafe { (*self.slots.get())[tail] = byte };
        self.tail.store((tail + 1) % N, Ordering::Relaxed);
        self.len.store(len + 1, Ordering::Release);

        Ok(())
    }

    fn reset_locked(&self) {
        self.head.store(0, Ordering::Relaxed);
        self.tail.store(0, Ordering::Relaxed);
        self.len.store(0, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<const N: usize>(queue: &CommandQueue<N>) -> Vec<u8> {
        let mut out = Vec::new();
        while let Ok(byte) = queue.dequeue() {
            out.push(byte);
        }
        out
    }

    #[test]
    fn yields_bytes_in_enqueue_order() {
        let queue = CommandQueue::<8>::new();
        for byte in [3, 1, 4, 1, 5] {
            queue.enqueue(byte).unwrap();
        }
        assert_eq!(queue.size(), 5);
        assert_eq!(drain(&queue), vec![3, 1, 4, 1, 5]);
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_order_across_wrap_around() {
        let queue = CommandQueue::<3>::new();
        let mut received = Vec::new();
        // interleave so head and tail wrap several times
        for round in 0..5u8 {
            queue.enqueue(round * 2).unwrap();
            queue.enqueue(round * 2 + 1).unwrap();
            received.push(queue.dequeue().unwrap());
            received.push(queue.dequeue().unwrap());
        }
        assert_eq!(received, (0..10).collect::<Vec<u8>>());
    }

    #[test]
    fn full_queue_rejects_without_growing() {
        let queue = CommandQueue::<2>::new();
        queue.enqueue(10).unwrap();
        queue.enqueue(11).unwrap();

        assert!(queue.is_full());
        assert_eq!(queue.enqueue(12), Err(QueueError::Full));
        assert_eq!(queue.size(), 2);
        assert_eq!(drain(&queue), vec![10, 11]);
    }

    #[test]
    fn empty_dequeue_reports_empty() {
        let queue = CommandQueue::<4>::new();
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));

        queue.enqueue(7).unwrap();
        assert_eq!(queue.dequeue(), Ok(7));
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
        // state is intact after the failed dequeue
        queue.enqueue(8).unwrap();
        assert_eq!(queue.dequeue(), Ok(8));
    }

    #[test]
    fn init_discards_buffered_bytes() {
        let queue = CommandQueue::<4>::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        queue.init();

        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    }

    #[test]
    fn overflow_keeps_only_the_newest_byte() {
        let queue = CommandQueue::<4>::new();
        let outcomes: Vec<Enqueued> = (1..=6).map(|byte| queue.enqueue_or_reset(byte)).collect();

        assert_eq!(
            outcomes,
            vec![
                Enqueued::Queued,
                Enqueued::Queued,
                Enqueued::Queued,
                Enqueued::Queued,
                Enqueued::AfterOverflow,
                Enqueued::Queued,
            ]
        );
        assert_eq!(queue.overflow_count(), 1);
        assert_eq!(drain(&queue), vec![5, 6]);
    }

    #[test]
    fn single_slot_queue_overflows_on_every_second_byte() {
        let queue = CommandQueue::<1>::new();
        assert_eq!(queue.enqueue_or_reset(1), Enqueued::Queued);
        assert_eq!(queue.enqueue_or_reset(2), Enqueued::AfterOverflow);
        assert_eq!(queue.dequeue(), Ok(2));
        assert_eq!(queue.capacity(), 1);
    }
}
