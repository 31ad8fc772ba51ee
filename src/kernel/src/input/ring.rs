//! Lock-free keystroke ring shared by the keyboard interrupt and the shell.
//!
//! The ring has exactly one producer (the keyboard interrupt handler) and
//! one consumer (the line reader). Each index has a single writer: the
//! producer owns `head`, the consumer owns `tail`. A character is stored in
//! its slot before `head` is published with release ordering, so a consumer
//! that observes the new `head` also observes the character.
//!
//! Adding a second producer or consumer breaks this discipline and needs
//! a lock around the affected side.

use crate::config::KEY_RING_CAPACITY;
use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use hearth_hal::Idle;

/// Fixed-capacity single-producer/single-consumer character queue.
///
/// One slot is always left unused so that `head == tail` unambiguously
/// means empty; a ring with `N` slots holds at most `N - 1` characters.
pub struct KeyRing<const N: usize = KEY_RING_CAPACITY> {
    slots: [AtomicU8; N],
    /// Next slot to write. Written only by the producer.
    head: AtomicUsize,
    /// Next slot to read. Written only by the consumer.
    tail: AtomicUsize,
    /// Characters refused because the ring was full.
    dropped: AtomicUsize,
}

impl<const N: usize> KeyRing<N> {
    /// Creates an empty ring.
    ///
    /// `const` so the ring can live in a `static` shared with the interrupt
    /// handler.
    pub const fn new() -> Self {
        const EMPTY: AtomicU8 = AtomicU8::new(0);
        assert!(N >= 2, "a key ring needs at least two slots");
        Self {
            slots: [EMPTY; N],
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
            dropped: AtomicUsize::new(0),
        }
    }

    /// Number of slots, including the one that always stays empty.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Appends a character. Producer side only.
    ///
    /// Returns `false` and drops the character when the ring is full;
    /// unread characters are never overwritten.
    pub fn try_push(&self, ch: u8) -> bool {
        let head = self.head.load(Ordering::Relaxed);
        let next = (head + 1) % N;
        if next == self.tail.load(Ordering::Acquire) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            return false;
        }
        self.slots[head].store(ch, Ordering::Relaxed);
        self.head.store(next, Ordering::Release);
        true
    }

    /// Removes the oldest character, if any. Consumer side only.
    pub fn try_pop(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        if tail == self.head.load(Ordering::Acquire) {
            return None;
        }
        let ch = self.slots[tail].load(Ordering::Relaxed);
        self.tail.store((tail + 1) % N, Ordering::Release);
        Some(ch)
    }

    /// Removes the oldest character, suspending through `idle` until one
    /// arrives. Consumer side only.
    pub fn pop_blocking<I: Idle + ?Sized>(&self, idle: &I) -> u8 {
        loop {
            if let Some(ch) = self.try_pop() {
                return ch;
            }
            idle.wait_until(&|| !self.is_empty());
        }
    }

    /// Returns `true` if no character is waiting.
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Acquire)
    }

    /// Returns `true` if the next push would be dropped.
    pub fn is_full(&self) -> bool {
        (self.head.load(Ordering::Acquire) + 1) % N == self.tail.load(Ordering::Acquire)
    }

    /// Number of characters waiting to be read.
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        (head + N - tail) % N
    }

    /// Returns the number of characters dropped since the last call and
    /// resets the count.
    pub fn take_dropped(&self) -> usize {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

impl<const N: usize> Default for KeyRing<N> {
    fn default() -> Self {
        Self::new()
    }
}
