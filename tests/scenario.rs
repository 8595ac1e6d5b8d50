extern crate bytering;
#[cfg(feature = "use_generic_array")]
extern crate generic_array;

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytering::{Lock, NoLock, RingBuffer};

#[test]
fn byte_and_bulk_round_trip() {
    let mut rb: RingBuffer<[u8; 256]> = RingBuffer::new();
    assert!(rb.is_empty());
    assert!(!rb.is_full());

    rb.put(0xAB).unwrap();
    assert!(!rb.is_empty());
    assert_eq!(rb.get(), Some(0xAB));
    assert!(rb.is_empty());

    for i in 0..256 {
        rb.put(i as u8).unwrap();
    }
    assert!(rb.is_full());
    assert!(rb.put(0xFF).is_err());

    for i in 0..256 {
        assert_eq!(rb.get(), Some(i as u8));
    }
    assert!(rb.is_empty());

    rb.reset();
    let data_in = [10, 20, 30, 40, 50];
    let mut data_out = [0; 5];
    assert_eq!(rb.write(&data_in), 5);
    assert_eq!(rb.read(&mut data_out), 5);
    assert_eq!(data_in, data_out);
}

static LOCKED: AtomicUsize = AtomicUsize::new(0);
static UNLOCKED: AtomicUsize = AtomicUsize::new(0);

fn on_lock() {
    LOCKED.fetch_add(1, Ordering::SeqCst);
}

fn on_unlock() {
    UNLOCKED.fetch_add(1, Ordering::SeqCst);
}

fn calls() -> (usize, usize) {
    (LOCKED.load(Ordering::SeqCst), UNLOCKED.load(Ordering::SeqCst))
}

#[test]
fn function_hooks_bracket_mutations() {
    let mut rb: RingBuffer<[u8; 4]> = RingBuffer::new();

    // nothing installed yet
    rb.put(1).unwrap();
    assert_eq!(calls(), (0, 0));

    rb.set_lock_hooks(Some(on_lock), Some(on_unlock));
    rb.put(2).unwrap();
    assert_eq!(calls(), (1, 1));

    // queries are not bracketed
    rb.len();
    rb.free_space();
    rb.is_full();
    rb.readable_block_length();
    assert_eq!(calls(), (1, 1));

    assert_eq!(rb.write(&[3, 4, 5]), 2);
    assert_eq!(calls(), (2, 2));

    assert_eq!(rb.peek(), Some(1));
    assert_eq!(calls(), (3, 3));

    rb.reset();
    assert_eq!(calls(), (4, 4));

    rb.set_lock_hooks(None, Some(on_unlock));
    rb.put(6).unwrap();
    assert_eq!(calls(), (4, 5));

    rb.set_lock_hooks(None, None);
    rb.get();
    assert_eq!(calls(), (4, 5));
}

struct Counting {
    depth: Cell<isize>,
    entries: Cell<usize>,
}

impl Lock for Counting {
    fn lock(&self) {
        assert_eq!(self.depth.get(), 0, "critical sections must not nest");
        self.depth.set(1);
        self.entries.set(self.entries.get() + 1);
    }

    fn unlock(&self) {
        assert_eq!(self.depth.get(), 1);
        self.depth.set(0);
    }
}

#[test]
fn borrowed_strategy_never_nests() {
    let counting = Counting { depth: Cell::new(0), entries: Cell::new(0) };
    let mut rb: RingBuffer<[u8; 16], &Counting> = RingBuffer::with_lock(&counting);

    assert_eq!(rb.write(b"0123456789abcdefXYZ"), 16);
    let mut out = [0; 4];
    assert_eq!(rb.read(&mut out), 4);
    rb.commit_write(4).unwrap();
    assert!(rb.commit_read(17).is_err());
    rb.commit_read(12).unwrap();

    assert_eq!(counting.depth.get(), 0);
    assert_eq!(counting.entries.get(), 5);
}

#[test]
fn dma_style_fill_and_drain() {
    let mut rb: RingBuffer<[u8; 32], NoLock> = RingBuffer::with_lock(NoLock);
    let frame: Vec<u8> = (0..100u8).collect();

    let mut sent = 0;
    let mut received = Vec::new();
    while received.len() < frame.len() {
        // producer side: one copy per linear block
        let n = match rb.writable_block() {
            Some(block) => {
                let n = block.len().min(frame.len() - sent).min(7);
                block[..n].copy_from_slice(&frame[sent..sent + n]);
                n
            }
            None => 0,
        };
        sent += n;
        rb.commit_write(n).unwrap();

        assert!(rb.len() <= rb.capacity());

        // consumer side
        let n = match rb.readable_block() {
            Some(block) => {
                let n = block.len().min(5);
                received.extend_from_slice(&block[..n]);
                n
            }
            None => 0,
        };
        rb.commit_read(n).unwrap();
    }
    assert_eq!(received, frame);
    assert!(rb.is_empty());
}

#[test]
fn full_commit_never_exceeds_capacity() {
    let mut rb: RingBuffer<[u8; 8]> = RingBuffer::new();
    for shift in 0..8 {
        rb.reset();
        rb.write(&[0; 8][..shift]);
        let mut sink = [0; 8];
        rb.read(&mut sink[..shift / 2]);
        let before = rb.len();
        let span = rb.writable_block_length();
        rb.commit_write(span).unwrap();
        assert!(rb.len() <= rb.capacity());
        assert_eq!(rb.len(), before + span);
        assert_eq!(rb.len() + rb.free_space(), rb.capacity());
    }
}

#[cfg(feature = "use_generic_array")]
#[test]
fn generic_array_storage() {
    use generic_array::typenum::U16;
    use generic_array::GenericArray;

    let mut rb: RingBuffer<GenericArray<u8, U16>> = RingBuffer::new();
    assert_eq!(rb.capacity(), 16);
    assert_eq!(rb.write(b"generic"), 7);
    assert_eq!(rb.as_slices(), (&b"generic"[..], &[][..]));
}
