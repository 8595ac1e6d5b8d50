//! Error types returned by `RingBuffer`.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating insufficient capacity
///
/// Returned by `RingBuffer::put` when the buffer is full. The rejected byte is
/// handed back so the caller can retry or drop it.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &'static str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CapacityError", CAPERROR)
    }
}

/// Error value indicating a commit longer than the granted linear block
///
/// Returned by `RingBuffer::commit_write` and `RingBuffer::commit_read`. The
/// buffer is left untouched. This is a contract violation by whoever performed
/// the block transfer, not a transient condition worth retrying.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct CommitError {
    /// Length passed to the commit.
    pub requested: usize,
    /// Linear block length available at the time of the commit.
    pub available: usize,
}

#[cfg(feature = "std")]
impl Error for CommitError {}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "commit of {} bytes exceeds linear block of {} bytes",
               self.requested,
               self.available)
    }
}

impl fmt::Debug for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "CommitError", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_error_fmt() {
        let err = CapacityError { element: 0xABu8 };
        assert_eq!(format!("{}", err), "insufficient capacity");
        assert_eq!(format!("{:?}", err), "CapacityError: insufficient capacity");
        assert_eq!(err.element, 0xAB);
    }

    #[test]
    fn test_commit_error_fmt() {
        let err = CommitError { requested: 9, available: 4 };
        assert_eq!(format!("{}", err),
                   "commit of 9 bytes exceeds linear block of 4 bytes");
        assert_eq!(format!("{:?}", err),
                   "CommitError: commit of 9 bytes exceeds linear block of 4 bytes");
    }
}
