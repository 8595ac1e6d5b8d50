//! Fixed-size byte arrays used as ring storage.

use std::slice;

/// Trait for fixed size byte arrays.
///
/// Implementors promise that `as_ptr` points at `capacity()` contiguous,
/// initialized bytes for as long as the array lives.
pub unsafe trait Array {
    #[doc(hidden)]
    /// The smallest index type that indexes the array.
    type Index: Index;

    /// Returns an all-zero array.
    fn zeroed() -> Self;

    /// Returns a raw pointer to the array's bytes.
    fn as_ptr(&self) -> *const u8;

    /// Returns an unsafe mutable pointer to the array's bytes.
    fn as_mut_ptr(&mut self) -> *mut u8;

    /// Returns number of bytes the array can hold
    fn capacity() -> usize;

    /// Converts the array to immutable slice
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.as_ptr(), Self::capacity()) }
    }

    /// Converts the array to mutable slice
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), Self::capacity()) }
    }
}

#[doc(hidden)]
pub trait Index: PartialEq + Copy {
    fn to_usize(self) -> usize;
    fn from(ix: usize) -> Self;
}

impl Index for usize {
    #[inline(always)]
    fn to_usize(self) -> usize {
        self
    }

    #[inline(always)]
    fn from(ix: usize) -> Self {
        ix
    }
}

unsafe impl<const N: usize> Array for [u8; N] {
    type Index = usize;

    #[inline(always)]
    fn zeroed() -> Self {
        [0; N]
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const u8 {
        <[u8]>::as_ptr(self)
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut u8 {
        <[u8]>::as_mut_ptr(self)
    }

    #[inline(always)]
    fn capacity() -> usize {
        N
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Array;
    use generic_array::{ArrayLength, GenericArray};

    unsafe impl<N> Array for GenericArray<u8, N>
    where
        N: ArrayLength<u8>,
    {
        type Index = usize;

        #[inline(always)]
        fn zeroed() -> Self {
            GenericArray::default()
        }

        #[inline(always)]
        fn as_ptr(&self) -> *const u8 {
            GenericArray::as_slice(self).as_ptr()
        }

        #[inline(always)]
        fn as_mut_ptr(&mut self) -> *mut u8 {
            GenericArray::as_mut_slice(self).as_mut_ptr()
        }

        #[inline(always)]
        fn capacity() -> usize {
            N::to_usize()
        }

        #[inline(always)]
        fn as_slice(&self) -> &[u8] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [u8] {
            GenericArray::as_mut_slice(self)
        }
    }
}
