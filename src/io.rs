//! `std::io` adapters.
//!
//! The buffer never blocks, so running out of room or data is reported as
//! `ErrorKind::WouldBlock` rather than as a zero-length transfer, which `io`
//! callers would take for a closed stream.

use std::io;

use array::Array;
use lock::Lock;
use RingBuffer;

impl<A: Array, L: Lock> io::Write for RingBuffer<A, L> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match RingBuffer::write(self, buf) {
            0 if !buf.is_empty() => Err(io::ErrorKind::WouldBlock.into()),
            n => Ok(n),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<A: Array, L: Lock> io::Read for RingBuffer<A, L> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match RingBuffer::read(self, buf) {
            0 if !buf.is_empty() => Err(io::ErrorKind::WouldBlock.into()),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read, Write};
    use RingBuffer;

    #[test]
    fn test_io_write_read() {
        let mut rb: RingBuffer<[u8; 8]> = RingBuffer::new();
        write!(rb, "{}-{}", 12, 34).unwrap();
        assert_eq!(rb.len(), 5);

        let mut out = [0; 8];
        let n = Read::read(&mut rb, &mut out).unwrap();
        assert_eq!(&out[..n], b"12-34");
    }

    #[test]
    fn test_io_would_block() {
        let mut rb: RingBuffer<[u8; 2]> = RingBuffer::new();
        let mut out = [0; 2];
        let err = Read::read(&mut rb, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);

        assert_eq!(Write::write(&mut rb, b"abc").unwrap(), 2);
        let err = Write::write(&mut rb, b"c").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);

        assert_eq!(Write::write(&mut rb, b"").unwrap(), 0);
        assert_eq!(Read::read(&mut rb, &mut []).unwrap(), 0);
    }
}
