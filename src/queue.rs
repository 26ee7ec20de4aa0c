//! Bounded queue for `no_std` firmware.
//!
//! Backed by `heapless::Deque` and guarded by `critical-section`, so a queue
//! can live in a `static` and be fed from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// Returned by [`Queue::push`] when the queue has no free slot.
///
/// Carries the rejected value back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull<T>(pub T);

/// Returned by [`Queue::pop`] when there is nothing queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmpty;

/// Fixed-capacity FIFO shared between a producer and a consumer.
pub struct Queue<T, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<T, SIZE>>>,
}

impl<T, const SIZE: usize> Queue<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the side that pushes values.
    pub const fn producer(&self) -> Producer<'_, T, SIZE> {
        Producer { queue: self }
    }

    /// Handle for the side that drains values.
    pub const fn consumer(&self) -> Consumer<'_, T, SIZE> {
        Consumer { queue: self }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Deque<T, SIZE>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow(cs).borrow_mut()))
    }

    /// Append a value, failing if the queue is full.
    pub fn push(&self, value: T) -> Result<(), QueueFull<T>> {
        self.with(|queue| queue.push_back(value).map_err(QueueFull))
    }

    /// Append a value, evicting the oldest one if the queue is full.
    ///
    /// Returns the evicted value, if any.
    pub fn push_overwrite(&self, value: T) -> Option<T> {
        self.with(|queue| {
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Only a zero-capacity queue can still be full here
            let _ = queue.push_back(value);
            evicted
        })
    }

    /// Take the oldest value.
    pub fn pop(&self) -> Result<T, QueueEmpty> {
        self.with(|queue| queue.pop_front().ok_or(QueueEmpty))
    }

    /// Drain the queue and return the newest value.
    pub fn pop_latest(&self) -> Option<T> {
        self.with(|queue| {
            let mut latest = None;
            while let Some(value) = queue.pop_front() {
                latest = Some(value);
            }
            latest
        })
    }

    pub fn len(&self) -> usize {
        self.with(|queue| queue.len())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|queue| queue.is_empty())
    }
}

impl<T, const SIZE: usize> Default for Queue<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Push side of a [`Queue`].
#[derive(Clone, Copy)]
pub struct Producer<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> Producer<'_, T, SIZE> {
    /// See [`Queue::push`].
    pub fn push(&self, value: T) -> Result<(), QueueFull<T>> {
        self.queue.push(value)
    }

    /// See [`Queue::push_overwrite`].
    pub fn push_overwrite(&self, value: T) -> Option<T> {
        self.queue.push_overwrite(value)
    }
}

/// Drain side of a [`Queue`].
#[derive(Clone, Copy)]
pub struct Consumer<'a, T, const SIZE: usize> {
    queue: &'a Queue<T, SIZE>,
}

impl<T, const SIZE: usize> Consumer<'_, T, SIZE> {
    /// See [`Queue::pop`].
    pub fn pop(&self) -> Result<T, QueueEmpty> {
        self.queue.pop()
    }

    /// See [`Queue::pop_latest`].
    pub fn pop_latest(&self) -> Option<T> {
        self.queue.pop_latest()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
