//! A bounded, blocking, multi-producer/multi-consumer FIFO of fixed-size
//! entries (spec §4.4).
//!
//! The C original pairs a ring buffer with two counting semaphores (one for
//! free slots, one for filled slots) and a mutex serializing buffer
//! mutation. Rust's std offers no semaphore, so this is realized with a
//! single `Mutex<Ring<T>>` guarded by two `Condvar`s — one signaled on
//! put (wakes waiting `get`s), one on get (wakes waiting `put`s) — which
//! preserves the same observable contract: FIFO order with respect to
//! mutex acquisition, blocking put/get, and a `timed_get` whose deadline
//! elapsing leaves the queue untouched.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

struct Ring<T> {
    buf: VecDeque<T>,
    depth: usize,
    closed: bool,
}

/// A fixed-capacity blocking queue of `T`. `T` stands in for the spec's
/// "fixed-size opaque entry" — entries are moved/cloned by value, never
/// aliased, matching "entries are copied by value; callers may reuse their
/// buffers immediately on return."
pub struct BoundedQueue<T> {
    state: Mutex<Ring<T>>,
    not_full: Condvar,
    not_empty: Condvar,
}

impl<T> BoundedQueue<T> {
    /// Allocates a queue with room for `depth` entries.
    pub fn new(depth: usize) -> BoundedQueue<T> {
        BoundedQueue {
            state: Mutex::new(Ring { buf: VecDeque::with_capacity(depth), depth, closed: false }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    /// Blocks until there is room, then enqueues `entry`.
    ///
    /// Returns `false` instead of blocking forever if the queue has been
    /// [`close`](Self::close)d; callers that only ever call `put` before
    /// `close` can ignore the return value.
    pub fn put(&self, entry: T) -> bool {
        let mut state = self.state.lock().unwrap();
        loop {
            if state.closed {
                return false;
            }
            if state.buf.len() < state.depth {
                state.buf.push_back(entry);
                self.not_empty.notify_one();
                return true;
            }
            state = self.not_full.wait(state).unwrap();
        }
    }

    /// Blocks until an entry is available, then dequeues it. Returns `None`
    /// only once the queue is closed and drained.
    pub fn get(&self) -> Option<T> {
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(v) = state.buf.pop_front() {
                self.not_full.notify_one();
                return Some(v);
            }
            if state.closed {
                return None;
            }
            state = self.not_empty.wait(state).unwrap();
        }
    }

    /// Like [`get`](Self::get), but gives up after `timeout` has elapsed
    /// with [`Error::Timeout`]. On timeout neither the buffer nor the
    /// waiting state is modified.
    pub fn timed_get(&self, timeout: Duration) -> Result<Option<T>> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock().unwrap();
        loop {
            if let Some(v) = state.buf.pop_front() {
                self.not_full.notify_one();
                return Ok(Some(v));
            }
            if state.closed {
                return Ok(None);
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::Timeout);
            }
            let (guard, timeout_result) = self.not_empty.wait_timeout(state, deadline - now).unwrap();
            state = guard;
            if timeout_result.timed_out() && state.buf.is_empty() && !state.closed {
                return Err(Error::Timeout);
            }
        }
    }

    /// Marks the queue closed and wakes every waiter. Idempotent. After
    /// close, `put` stops accepting new entries and `get`/`timed_get`
    /// return `None`/`Ok(None)` once drained, instead of blocking forever —
    /// the realization of "how a worker pool finds out there's no more
    /// work," which the original C queue (used by a single long-running
    /// daemon) never needed.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        self.not_full.notify_all();
        self.not_empty.notify_all();
    }

    /// Number of entries currently buffered.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
