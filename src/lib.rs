//! A byte ring buffer with fixed capacity and zero-copy block access.
//!
//! It can be stored directly on the stack or in a `static`, and never
//! allocates.
//!
//! The buffer is meant to sit between exactly one producer and one consumer,
//! for example an interrupt handler filling it from a UART while the main loop
//! drains it. Bytes can move one at a time (`put`/`get`), in bulk
//! (`write`/`read`), or through the *linear block* interface, which hands out
//! the longest contiguous span of storage so a DMA engine or a single
//! `memcpy` can fill or drain it in one go.
//!
//! # Feature Flags
//! The **bytering** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; adds `std::error::Error` impls for the error types and
//!     `std::io::{Read, Write}` for `RingBuffer`
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for `RingBuffer` storage.
//!
//! # Capacity
//!
//! The capacity is the length of the backing array. All of it is usable: an
//! explicit full flag tells a full buffer apart from an empty one, instead of
//! sacrificing a slot.
//!
//! # Examples
//! ```
//! use bytering::RingBuffer;
//!
//! let mut rb: RingBuffer<[u8; 8]> = RingBuffer::new();
//! assert_eq!(rb.capacity(), 8);
//!
//! assert_eq!(rb.write(b"hello"), 5);
//! assert_eq!(rb.get(), Some(b'h'));
//!
//! let mut out = [0; 8];
//! let n = rb.read(&mut out);
//! assert_eq!(&out[..n], b"ello");
//! assert!(rb.is_empty());
//! ```
//!
//! # Linear blocks
//! ```
//! use bytering::RingBuffer;
//!
//! let mut rb: RingBuffer<[u8; 8]> = RingBuffer::new();
//! rb.write(&[0; 6]);
//! let mut sink = [0; 6];
//! rb.read(&mut sink);
//!
//! // The buffer is empty but its indices sit at 6, so the room is split in
//! // two spans: two bytes up to the end of storage, then six from the start.
//! assert_eq!(rb.free_space(), 8);
//! assert_eq!(rb.writable_block_length(), 2);
//!
//! rb.writable_block().unwrap().copy_from_slice(b"ab");
//! rb.commit_write(2).unwrap();
//! assert_eq!(rb.writable_block_length(), 6);
//!
//! assert_eq!(rb.readable_block(), Some(&b"ab"[..]));
//! rb.commit_read(2).unwrap();
//! assert!(rb.is_empty());
//! ```
//!
//! # Locking
//!
//! Every mutating call is bracketed by a [`Lock`] strategy. The default,
//! [`LockHooks`], calls two optional plain functions, which is how interrupt
//! masking is usually wired in:
//!
//! ```
//! use bytering::RingBuffer;
//!
//! fn disable_irq() { /* cpsid i */ }
//! fn enable_irq() { /* cpsie i */ }
//!
//! let mut rb: RingBuffer<[u8; 64]> = RingBuffer::new();
//! rb.set_lock_hooks(Some(disable_irq), Some(enable_irq));
//! rb.put(0x55).unwrap();
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;
#[cfg(feature = "use_generic_array")]
extern crate generic_array;

#[cfg(not(any(feature="std", test)))]
extern crate core as std;

use std::fmt;

mod array;
mod block;
pub mod error;
#[cfg(feature = "std")]
mod io;
mod lock;
mod utils;

pub use array::Array;
pub use error::{CapacityError, CommitError};
pub use lock::{Lock, LockHooks, NoLock};
use array::Index as ArrayIndex;
use utils::*;

/// A fixed capacity byte ring buffer.
///
/// `A` is the backing byte array, whose length is the capacity. `L` is the
/// lock strategy run around every mutating call.
///
/// Invariants kept across every public call:
///
/// - both indices are below the capacity,
/// - `full` is set exactly when the buffer holds `capacity()` bytes,
/// - equal indices with `full` unset mean the buffer is empty.
pub struct RingBuffer<A: Array, L: Lock = LockHooks> {
    xs: A,
    write: A::Index,
    read: A::Index,
    full: bool,
    lock: L,
}

impl<A: Array, L: Lock + Default> Default for RingBuffer<A, L> {
    #[inline]
    fn default() -> Self {
        RingBuffer::with_lock(L::default())
    }
}

impl<A: Array, L: Lock> fmt::Debug for RingBuffer<A, L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (a, b) = self.as_slices();
        f.debug_list().entries(a.iter().chain(b.iter())).finish()
    }
}

impl<A: Array, L: Lock> RingBuffer<A, L> {
    #[inline]
    fn wrap_add(index: usize, addend: usize) -> usize {
        wrap_add(index, addend, A::capacity())
    }

    #[inline]
    fn write_index(&self) -> usize {
        self.write.to_usize()
    }

    #[inline]
    fn read_index(&self) -> usize {
        self.read.to_usize()
    }

    #[inline]
    fn set_write_index(&mut self, write: usize) {
        debug_assert!(write < A::capacity());
        self.write = ArrayIndex::from(write);
    }

    #[inline]
    fn set_read_index(&mut self, read: usize) {
        debug_assert!(read < A::capacity());
        self.read = ArrayIndex::from(read);
    }

    /// Runs `f` between the strategy's `lock` and `unlock`.
    #[inline]
    fn critical<R, F>(&mut self, f: F) -> R
        where F: FnOnce(&mut Self) -> R
    {
        self.lock.lock();
        let ret = f(self);
        self.lock.unlock();
        ret
    }

    fn put_unlocked(&mut self, byte: u8) -> bool {
        if self.full {
            return false;
        }
        let write = self.write_index();
        self.xs.as_mut_slice()[write] = byte;
        let write = Self::wrap_add(write, 1);
        self.set_write_index(write);
        self.full = write == self.read_index();
        true
    }

    fn get_unlocked(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let read = self.read_index();
        let byte = self.xs.as_slice()[read];
        self.set_read_index(Self::wrap_add(read, 1));
        self.full = false;
        Some(byte)
    }

    /// Creates an empty `RingBuffer` guarded by `lock`.
    ///
    /// # Panics
    ///
    /// Panics if the backing array has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::{NoLock, RingBuffer};
    ///
    /// let rb: RingBuffer<[u8; 16], NoLock> = RingBuffer::with_lock(NoLock);
    /// assert!(rb.is_empty());
    /// ```
    pub fn with_lock(lock: L) -> Self {
        assert!(A::capacity() > 0, "RingBuffer storage must not be empty");
        RingBuffer {
            xs: A::zeroed(),
            write: ArrayIndex::from(0),
            read: ArrayIndex::from(0),
            full: false,
            lock: lock,
        }
    }

    /// Replaces the lock strategy.
    #[inline]
    pub fn set_lock(&mut self, lock: L) {
        self.lock = lock;
    }

    /// Returns the lock strategy.
    #[inline]
    pub fn lock_strategy(&self) -> &L {
        &self.lock
    }

    /// Converts into a buffer with a different lock strategy, keeping the
    /// stored bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::{NoLock, RingBuffer};
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// rb.put(1).unwrap();
    ///
    /// let mut rb = rb.into_lock(NoLock);
    /// assert_eq!(rb.get(), Some(1));
    /// ```
    pub fn into_lock<M: Lock>(self, lock: M) -> RingBuffer<A, M> {
        let RingBuffer { xs, write, read, full, .. } = self;
        RingBuffer {
            xs: xs,
            write: write,
            read: read,
            full: full,
            lock: lock,
        }
    }

    /// Empties the buffer. Stored bytes are discarded, not zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// rb.write(&[1, 2, 3]);
    /// rb.reset();
    /// assert!(rb.is_empty());
    /// assert_eq!(rb.len(), 0);
    /// ```
    pub fn reset(&mut self) {
        self.critical(|rb| {
            rb.set_write_index(0);
            rb.set_read_index(0);
            rb.full = false;
        });
        trace!(capacity = A::capacity(), "ring buffer reset");
    }

    /// Returns true if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.full && self.write_index() == self.read_index()
    }

    /// Returns true if the buffer holds `capacity()` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 2]> = RingBuffer::new();
    /// rb.put(1).unwrap();
    /// assert!(!rb.is_full());
    /// rb.put(2).unwrap();
    /// assert!(rb.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Returns the capacity of the `RingBuffer`, the length of its backing
    /// array.
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns the number of bytes stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// assert_eq!(rb.len(), 0);
    /// rb.put(1).unwrap();
    /// assert_eq!(rb.len(), 1);
    /// ```
    #[inline]
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        count(A::capacity(), self.write_index(), self.read_index(), self.full)
    }

    /// Returns the number of bytes that can still be stored.
    ///
    /// Always `capacity() - len()`, though computed on its own.
    #[inline]
    #[doc(alias = "free")]
    pub fn free_space(&self) -> usize {
        free(A::capacity(), self.write_index(), self.read_index(), self.full)
    }

    /// Appends one byte.
    ///
    /// Returns the byte back inside a `CapacityError` if the buffer is full;
    /// nothing is overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 1]> = RingBuffer::new();
    /// assert!(rb.put(7).is_ok());
    /// assert_eq!(rb.put(8).unwrap_err().element, 8);
    /// assert_eq!(rb.peek(), Some(7));
    /// ```
    pub fn put(&mut self, byte: u8) -> Result<(), CapacityError<u8>> {
        if self.critical(|rb| rb.put_unlocked(byte)) {
            Ok(())
        } else {
            Err(CapacityError { element: byte })
        }
    }

    /// Removes the oldest byte and returns it, or `None` if the buffer is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// rb.put(0xAB).unwrap();
    /// assert_eq!(rb.get(), Some(0xAB));
    /// assert_eq!(rb.get(), None);
    /// ```
    pub fn get(&mut self) -> Option<u8> {
        self.critical(|rb| rb.get_unlocked())
    }

    /// Returns the oldest byte without removing it, or `None` if the buffer
    /// is empty.
    pub fn peek(&self) -> Option<u8> {
        self.lock.lock();
        let byte = if self.is_empty() {
            None
        } else {
            Some(self.xs.as_slice()[self.read_index()])
        };
        self.lock.unlock();
        byte
    }

    /// Appends as many bytes of `data` as fit, in order, and returns how many
    /// were written.
    ///
    /// The whole call runs inside one lock bracket. A short count means the
    /// buffer filled up; the remaining bytes are left to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// assert_eq!(rb.write(&[1, 2, 3]), 3);
    /// assert_eq!(rb.write(&[4, 5, 6]), 1);
    /// assert!(rb.is_full());
    /// ```
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.critical(|rb| {
            let mut written = 0;
            for &byte in data {
                if !rb.put_unlocked(byte) {
                    break;
                }
                written += 1;
            }
            written
        })
    }

    /// Removes up to `out.len()` bytes into `out`, oldest first, and returns
    /// how many were read.
    ///
    /// The whole call runs inside one lock bracket.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        self.critical(|rb| {
            let mut read = 0;
            for slot in out.iter_mut() {
                match rb.get_unlocked() {
                    Some(byte) => *slot = byte,
                    None => break,
                }
                read += 1;
            }
            read
        })
    }

    /// Returns a pair of slices which contain, in order, the stored bytes.
    ///
    /// The second slice is empty unless the contents wrap around the end of
    /// storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// rb.write(&[1, 2, 3]);
    /// assert_eq!(rb.as_slices(), (&[1, 2, 3][..], &[][..]));
    ///
    /// rb.get();
    /// rb.get();
    /// rb.write(&[4, 5]);
    /// assert_eq!(rb.as_slices(), (&[3, 4][..], &[5][..]));
    /// ```
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let buf = self.xs.as_slice();
        let write = self.write_index();
        let read = self.read_index();
        if self.is_empty() {
            (&buf[..0], &buf[..0])
        } else if write > read {
            (&buf[read..write], &buf[..0])
        } else {
            (&buf[read..], &buf[..write])
        }
    }
}

impl<A: Array> RingBuffer<A, LockHooks> {
    /// Creates an empty `RingBuffer` with no lock hooks installed.
    ///
    /// # Panics
    ///
    /// Panics if the backing array has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let rb: RingBuffer<[u8; 256]> = RingBuffer::new();
    /// assert_eq!(rb.capacity(), 256);
    /// assert!(rb.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        RingBuffer::with_lock(LockHooks::none())
    }

    /// Installs hooks called before and after each critical section,
    /// replacing any installed earlier. `None` disables that side.
    pub fn set_lock_hooks(&mut self, lock: Option<fn()>, unlock: Option<fn()>) {
        self.lock = LockHooks::new(lock, unlock);
    }
}
