//! Index arithmetic shared by the byte-at-a-time and block paths.
//!
//! Every function takes the full `(capacity, write, read, full)` state so the
//! two paths can never disagree on where a boundary lies.

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Number of stored bytes.
#[inline]
pub fn count(capacity: usize, write: usize, read: usize, full: bool) -> usize {
    debug_assert!(write < capacity);
    debug_assert!(read < capacity);
    if full {
        capacity
    } else if write >= read {
        write - read
    } else {
        capacity - (read - write)
    }
}

/// Number of bytes that can still be stored.
#[inline]
pub fn free(capacity: usize, write: usize, read: usize, full: bool) -> usize {
    debug_assert!(write < capacity);
    debug_assert!(read < capacity);
    if full {
        0
    } else if write >= read {
        capacity - (write - read)
    } else {
        read - write
    }
}

/// Bytes writable at `write` before hitting the reader or the end of storage.
#[inline]
pub fn linear_write_len(capacity: usize, write: usize, read: usize, full: bool) -> usize {
    if full {
        0
    } else if read > write {
        read - write
    } else {
        capacity - write
    }
}

/// Bytes readable at `read` before hitting the writer or the end of storage.
#[inline]
pub fn linear_read_len(capacity: usize, write: usize, read: usize, full: bool) -> usize {
    if !full && write == read {
        0
    } else if write > read {
        write - read
    } else {
        capacity - read
    }
}
