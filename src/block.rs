//! Linear block access.
//!
//! A bulk-transfer engine needs one address and one length, not a stream of
//! single-byte calls. The queries here describe the longest span of storage
//! that can be filled or drained without wrapping; after the transfer the
//! caller commits the number of bytes it moved. Draining or filling across the
//! wrap point takes a second query/commit round.

use std::ptr::NonNull;

use array::Array;
use error::CommitError;
use lock::Lock;
use utils::*;
use RingBuffer;

impl<A: Array, L: Lock> RingBuffer<A, L> {
    /// Returns the number of bytes that can be written contiguously starting
    /// at the write index, or 0 if the buffer is full.
    ///
    /// The span ends at the read index when the reader is ahead, otherwise at
    /// the physical end of storage.
    #[inline]
    pub fn writable_block_length(&self) -> usize {
        linear_write_len(A::capacity(), self.write_index(), self.read_index(), self.full)
    }

    /// Returns the number of bytes that can be read contiguously starting at
    /// the read index, or 0 if the buffer is empty.
    #[inline]
    pub fn readable_block_length(&self) -> usize {
        linear_read_len(A::capacity(), self.write_index(), self.read_index(), self.full)
    }

    /// Returns the address a bulk transfer should write to, or `None` if the
    /// buffer is full.
    ///
    /// At most `writable_block_length()` bytes may be written there before
    /// calling `commit_write`.
    pub fn writable_block_address(&mut self) -> Option<NonNull<u8>> {
        if self.full {
            return None;
        }
        let write = self.write_index();
        NonNull::new(self.xs.as_mut_slice()[write..].as_mut_ptr())
    }

    /// Returns the address a bulk transfer should read from, or `None` if the
    /// buffer is empty.
    ///
    /// The memory behind the address must only be read. At most
    /// `readable_block_length()` bytes are valid there.
    pub fn readable_block_address(&self) -> Option<NonNull<u8>> {
        if self.is_empty() {
            return None;
        }
        let read = self.read_index();
        NonNull::new(self.xs.as_slice()[read..].as_ptr() as *mut u8)
    }

    /// Returns the writable linear block as a slice, or `None` if the buffer
    /// is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 8]> = RingBuffer::new();
    /// {
    ///     let block = rb.writable_block().unwrap();
    ///     assert_eq!(block.len(), 8);
    ///     block[..3].copy_from_slice(b"abc");
    /// }
    /// rb.commit_write(3).unwrap();
    /// assert_eq!(rb.get(), Some(b'a'));
    /// ```
    pub fn writable_block(&mut self) -> Option<&mut [u8]> {
        let len = self.writable_block_length();
        if len == 0 {
            return None;
        }
        let write = self.write_index();
        Some(&mut self.xs.as_mut_slice()[write..write + len])
    }

    /// Returns the readable linear block as a slice, or `None` if the buffer
    /// is empty.
    pub fn readable_block(&self) -> Option<&[u8]> {
        let len = self.readable_block_length();
        if len == 0 {
            return None;
        }
        let read = self.read_index();
        Some(&self.xs.as_slice()[read..read + len])
    }

    /// Marks `len` bytes, written into the writable block, as stored.
    ///
    /// Fails without touching the buffer if `len` exceeds
    /// `writable_block_length()`. Committing 0 bytes is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use bytering::RingBuffer;
    ///
    /// let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();
    /// assert!(rb.commit_write(5).is_err());
    /// assert!(rb.commit_write(4).is_ok());
    /// assert!(rb.is_full());
    /// ```
    pub fn commit_write(&mut self, len: usize) -> Result<(), CommitError> {
        let result = self.critical(|rb| {
            let available = rb.writable_block_length();
            if len > available {
                return Err(CommitError { requested: len, available: available });
            }
            if len > 0 {
                let write = Self::wrap_add(rb.write_index(), len);
                rb.set_write_index(write);
                rb.full = write == rb.read_index();
            }
            Ok(())
        });
        match result {
            Ok(()) => trace!(len = len, "commit_write"),
            Err(ref err) => {
                warn!(requested = err.requested, available = err.available, "rejected commit_write")
            }
        }
        result
    }

    /// Marks `len` bytes, read out of the readable block, as consumed.
    ///
    /// Fails without touching the buffer if `len` exceeds
    /// `readable_block_length()`. Committing 0 bytes is a no-op.
    pub fn commit_read(&mut self, len: usize) -> Result<(), CommitError> {
        let result = self.critical(|rb| {
            let available = rb.readable_block_length();
            if len > available {
                return Err(CommitError { requested: len, available: available });
            }
            if len > 0 {
                let read = Self::wrap_add(rb.read_index(), len);
                rb.set_read_index(read);
                rb.full = false;
            }
            Ok(())
        });
        match result {
            Ok(()) => trace!(len = len, "commit_read"),
            Err(ref err) => {
                warn!(requested = err.requested, available = err.available, "rejected commit_read")
            }
        }
        result
    }
}
