//! Fixed-length heap buffers with allocator-aware release
//!
//! Solver working sets are sized once, up front. A growable container would
//! pay for capacity tracking and reallocation logic that can never be used,
//! so this module provides a buffer that owns exactly `len` elements for its
//! whole lifetime. The length recorded at construction is the length used
//! to compute the deallocation layout, so the allocator always sees a
//! release that exactly matches the original request.
//!
//! Storage starts out uninitialized unless the zeroing constructor is used.
//! The unchecked accessors make that contract explicit: they are `unsafe`,
//! cost nothing at runtime, and require both an in-range index and a
//! previously written (or zeroed) slot. Checked access for debugging is
//! available through the slice deref.

use crate::Error;
use allocator_api2::alloc::{Allocator, Global};
use bytemuck::Zeroable;
use core::alloc::Layout;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;
use core::slice;

/// A heap-allocated buffer of exactly `len` elements of `T`
///
/// The buffer is move-only and exclusively owned: it is released back to its
/// allocator exactly once, when dropped, using the same layout it was
/// allocated with. There is no resize operation and no allocator traffic
/// during element access.
///
/// Element types are restricted to `Copy` so that slots can be overwritten
/// freely without running destructors on whatever bits they held before.
///
/// # Initialization
///
/// [`FixedBuffer::zeroed_in`] produces fully readable storage. The `unsafe`
/// [`FixedBuffer::uninit_in`] constructor skips initialization entirely;
/// its contract is that every slot is written before it is read through any
/// accessor, checked or not.
pub struct FixedBuffer<T: Copy, A: Allocator = Global> {
    /// Start of the owned allocation
    ptr: NonNull<T>,
    /// Element count fixed at construction, also the deallocation size
    len: usize,
    /// Allocator that provided the block and will take it back
    alloc: A,
}

/// SAFETY: The buffer exclusively owns its allocation, so sending it to
///         another thread moves sole access along with it.
unsafe impl<T: Copy + Send, A: Allocator + Send> Send for FixedBuffer<T, A> {}

/// SAFETY: Shared references only permit reads of the owned elements.
unsafe impl<T: Copy + Sync, A: Allocator + Sync> Sync for FixedBuffer<T, A> {}

impl<T: Copy> FixedBuffer<T, Global> {
    /// Allocate a zero-initialized buffer of `len` elements from the global
    /// allocator.
    pub fn zeroed(len: usize) -> Result<Self, Error>
    where
        T: Zeroable,
    {
        Self::zeroed_in(len, Global)
    }

    /// Allocate an uninitialized buffer of `len` elements from the global
    /// allocator.
    ///
    /// # Safety
    ///
    /// See [`FixedBuffer::uninit_in`].
    pub unsafe fn uninit(len: usize) -> Result<Self, Error> {
        Self::uninit_in(len, Global)
    }
}

impl<T: Copy, A: Allocator> FixedBuffer<T, A> {
    /// Compute the array layout for `len` elements, or fail without
    /// touching the allocator.
    fn layout(len: usize) -> Result<Layout, Error> {
        Layout::array::<T>(len).map_err(|_| Error::Capacity)
    }

    /// Allocate a zero-initialized buffer of `len` elements from `alloc`.
    ///
    /// Every slot is immediately readable. The `Zeroable` bound guarantees
    /// the all-zero bit pattern is a valid `T`.
    pub fn zeroed_in(len: usize, alloc: A) -> Result<Self, Error>
    where
        T: Zeroable,
    {
        let layout = Self::layout(len)?;
        let ptr = alloc
            .allocate_zeroed(layout)
            .map_err(|_| Error::Alloc {
                bytes: layout.size(),
            })?
            .cast();
        Ok(Self { ptr, len, alloc })
    }

    /// Allocate an uninitialized buffer of `len` elements from `alloc`.
    ///
    /// This is the zero-cost construction path: no bytes are written.
    ///
    /// # Safety
    ///
    /// The caller must write each element, via [`Self::fill`], the unchecked
    /// accessors, or the raw pointer, before that element is read through
    /// any accessor including the slice deref. Reading a slot that was
    /// never written is undefined behavior.
    pub unsafe fn uninit_in(len: usize, alloc: A) -> Result<Self, Error> {
        let layout = Self::layout(len)?;
        let ptr = alloc
            .allocate(layout)
            .map_err(|_| Error::Alloc {
                bytes: layout.size(),
            })?
            .cast();
        Ok(Self { ptr, len, alloc })
    }

    /// Number of elements in the buffer, fixed at construction
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds zero elements
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw pointer to the first element
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Raw mutable pointer to the first element
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Read one element without any bounds or initialization check.
    ///
    /// This is the hot-path accessor; it compiles to a single indexed load.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`], and the slot must have been
    /// initialized (by the zeroing constructor or by a prior write).
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.ptr.as_ptr().add(index)
    }

    /// Mutable access to one element without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Self::len`]. Writing through the returned
    /// reference initializes the slot.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        &mut *self.ptr.as_ptr().add(index)
    }

    /// Write `value` to every slot.
    ///
    /// Writes go through raw pointers, so this is valid on buffers from
    /// [`Self::uninit_in`] and leaves every slot initialized afterwards.
    pub fn fill(&mut self, value: T) {
        for i in 0..self.len {
            // SAFETY: `i` is within the allocation of `len` elements, and
            //         a plain write needs no initialized destination.
            unsafe { self.ptr.as_ptr().add(i).write(value) };
        }
    }
}

impl<T: Copy, A: Allocator> Deref for FixedBuffer<T, A> {
    type Target = [T];

    /// Checked element access, iteration, and the rest of the slice API.
    ///
    /// Reads require initialized slots, per the constructor contract.
    #[inline(always)]
    fn deref(&self) -> &[T] {
        // SAFETY: `ptr` covers `len` elements for the buffer's lifetime.
        //         Initialization of read slots is the uninit constructor's
        //         documented caller obligation.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Copy, A: Allocator> DerefMut for FixedBuffer<T, A> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: As in `deref`, plus `&mut self` guarantees unique access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Copy, A: Allocator> Drop for FixedBuffer<T, A> {
    fn drop(&mut self) {
        let layout = Layout::array::<T>(self.len).expect("layout was validated at construction");
        // SAFETY: `ptr` came from this allocator with exactly this layout,
        //         and ownership is exclusive, so this release happens once.
        unsafe { self.alloc.deallocate(self.ptr.cast(), layout) };
    }
}

#[cfg(test)]
mod test {
    use super::FixedBuffer;

    #[test]
    fn len_matches_construction() {
        for n in [0_usize, 1, 7, 64, 1000] {
            let buf: FixedBuffer<u32> = FixedBuffer::zeroed(n).expect("alloc");
            assert_eq!(buf.len(), n);
            assert_eq!(buf.is_empty(), n == 0);
        }
    }

    #[test]
    fn zeroed_reads_zero() {
        let buf: FixedBuffer<u64> = FixedBuffer::zeroed(128).expect("alloc");
        assert!(buf.iter().all(|&x| x == 0));
    }

    #[test]
    fn write_read_round_trip() {
        let mut buf: FixedBuffer<u32> = FixedBuffer::zeroed(100).expect("alloc");
        for i in 0..buf.len() {
            buf[i] = (i as u32) * 3 + 1;
        }
        for i in 0..buf.len() {
            assert_eq!(buf[i], (i as u32) * 3 + 1);
        }
    }

    #[test]
    fn fill_initializes_uninit_storage() {
        // SAFETY: every slot is filled before any read.
        let mut buf: FixedBuffer<i64> = unsafe { FixedBuffer::uninit(33) }.expect("alloc");
        buf.fill(-5);
        assert!(buf.iter().all(|&x| x == -5));
    }

    #[test]
    fn unchecked_access_matches_checked() {
        let mut buf: FixedBuffer<u16> = FixedBuffer::zeroed(16).expect("alloc");
        for i in 0..buf.len() {
            // SAFETY: `i` is in range and the buffer was zero-initialized.
            unsafe { *buf.get_unchecked_mut(i) = i as u16 };
        }
        for i in 0..buf.len() {
            // SAFETY: as above.
            assert_eq!(unsafe { *buf.get_unchecked(i) }, buf[i]);
        }
    }

    #[test]
    fn zero_length_buffer_is_usable() {
        let buf: FixedBuffer<u8> = FixedBuffer::zeroed(0).expect("alloc");
        assert!(buf.is_empty());
        assert_eq!(buf.iter().count(), 0);
    }
}
