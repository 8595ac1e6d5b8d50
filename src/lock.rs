//! Lock strategies for `RingBuffer`.
//!
//! A strategy brackets each mutating call on the buffer: `lock` runs before the
//! state is touched and `unlock` after, on success and failure alike. Bulk
//! calls (`write`, `read`) are bracketed once, never per byte.
//!
//! Neither hook may call back into the buffer it guards.

/// Acquire/release pair invoked around critical sections of a `RingBuffer`.
pub trait Lock {
    /// Enters the critical section, e.g. by masking an interrupt.
    fn lock(&self);

    /// Leaves the critical section.
    fn unlock(&self);
}

/// Lock strategy that does nothing.
///
/// The caller is responsible for keeping to one producer and one consumer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoLock;

impl Lock for NoLock {
    #[inline(always)]
    fn lock(&self) {}

    #[inline(always)]
    fn unlock(&self) {}
}

/// A pair of optional plain function hooks.
///
/// A missing hook makes that side a no-op.
///
/// ```
/// use bytering::{Lock, LockHooks};
///
/// fn mask_irq() {}
///
/// let hooks = LockHooks::new(Some(mask_irq), None);
/// hooks.lock();
/// hooks.unlock();
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockHooks {
    lock: Option<fn()>,
    unlock: Option<fn()>,
}

impl LockHooks {
    /// Creates hooks from an optional lock and unlock function.
    #[inline]
    pub const fn new(lock: Option<fn()>, unlock: Option<fn()>) -> Self {
        LockHooks { lock, unlock }
    }

    /// Creates hooks with neither side installed.
    #[inline]
    pub const fn none() -> Self {
        LockHooks::new(None, None)
    }
}

impl Lock for LockHooks {
    #[inline]
    fn lock(&self) {
        if let Some(lock) = self.lock {
            lock();
        }
    }

    #[inline]
    fn unlock(&self) {
        if let Some(unlock) = self.unlock {
            unlock();
        }
    }
}

impl<F, G> Lock for (F, G)
where
    F: Fn(),
    G: Fn(),
{
    #[inline]
    fn lock(&self) {
        (self.0)()
    }

    #[inline]
    fn unlock(&self) {
        (self.1)()
    }
}

impl<'a, L: Lock + ?Sized> Lock for &'a L {
    #[inline]
    fn lock(&self) {
        (**self).lock()
    }

    #[inline]
    fn unlock(&self) {
        (**self).unlock()
    }
}
