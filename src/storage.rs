//! Shared backing storage for [`Strand`] handles.
//!
//! A [`Storage`] is a fixed-capacity byte buffer behind an [`Rc`]: the strong
//! count *is* the number of live handles, and the buffer is freed exactly when
//! the last one drops. Next to the buffer sits a [`Lease`] cell tracking which
//! handle, if any, currently holds the right to write in place.
//!
//! # Safety
//!
//! Heap buffers are `UnsafeCell`ed so a handle can write through a shared
//! `Rc`. Soundness rests on the mutation protocol enforced by `Strand`:
//!
//! * in-place writes only happen while the strong count is 1, so no sibling
//!   handle can hold a `&[u8]` into the same storage;
//! * writes within the window go through `&mut Strand`, which excludes live
//!   borrows of that handle's own slices;
//! * the only writes reachable from a shared `&Strand` target spare capacity
//!   beyond every live borrow (concatenation fast path).
//!
//! Heap buffers are also zero-initialized, so every byte below capacity is a
//! defined read even past a handle's logical window.
//!
//! [`Strand`]: crate::Strand

use core::cell::{Cell, UnsafeCell};
use core::ptr;
use std::rc::Rc;


thread_local! {
    static NEXT_HANDLE_ID: Cell<u64> = const { Cell::new(0) };
}

/// Identity of a live [`Strand`], used to tag the storage lease.
///
/// Every handle construction draws a fresh id, clones included; a Rust move
/// carries the id along with the value, so a lease held before a move is still
/// held after it.
///
/// [`Strand`]: crate::Strand
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct HandleId(u64);

impl HandleId {
    /// Returns an id never produced before on this thread.
    #[inline]
    pub(crate) fn next() -> Self {
        NEXT_HANDLE_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            Self(id)
        })
    }
}

/// Write lease of a [`Storage`]: who may mutate the buffer in place.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Lease {
    /// Nobody holds the lease; the next writer may claim it.
    Unowned,
    /// Held by the identified handle until it forfeits or drops.
    Owned(HandleId),
    /// Permanently unclaimable (storage wraps foreign bytes).
    Frozen,
}

enum Buf {
    /// Crate-allocated, fixed capacity, zero-initialized.
    Heap(Box<[UnsafeCell<u8>]>),
    /// Borrowed from the program's static data, never written.
    Static(&'static [u8]),
}

/// A reference-counted byte buffer shared by any number of handles.
pub(crate) struct Storage {
    lease: Cell<Lease>,
    buf: Buf,
}

impl Storage {
    /// Allocates a zeroed heap storage of exactly `capacity` bytes.
    pub(crate) fn with_capacity(capacity: usize) -> Rc<Self> {
        Rc::new(Self {
            lease: Cell::new(Lease::Unowned),
            buf: Buf::Heap(zeroed(capacity)),
        })
    }

    /// Wraps static bytes without copying. The storage is frozen: the lease
    /// can never be claimed and the bytes are never written.
    pub(crate) fn frozen(bytes: &'static [u8]) -> Rc<Self> {
        Rc::new(Self {
            lease: Cell::new(Lease::Frozen),
            buf: Buf::Static(bytes),
        })
    }

    /// Total buffer size in bytes (not the logical length of any handle).
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        match &self.buf {
            Buf::Heap(cells) => cells.len(),
            Buf::Static(bytes) => bytes.len(),
        }
    }

    #[inline]
    pub(crate) fn is_frozen(&self) -> bool {
        matches!(self.lease.get(), Lease::Frozen)
    }

    /// Returns `true` if `id` holds or could immediately claim the lease,
    /// without acquiring it.
    #[inline]
    pub(crate) fn can_claim(&self, id: HandleId) -> bool {
        match self.lease.get() {
            Lease::Unowned => true,
            Lease::Owned(holder) => holder == id,
            Lease::Frozen => false,
        }
    }

    /// Tries to acquire the lease for `id`. Idempotent for the current
    /// holder; fails if another handle holds it or the storage is frozen.
    #[inline]
    pub(crate) fn claim(&self, id: HandleId) -> bool {
        let claimable = self.can_claim(id);
        if claimable {
            self.lease.set(Lease::Owned(id));
        }
        claimable
    }

    /// Releases the lease if `id` holds it; no-op otherwise.
    #[inline]
    pub(crate) fn forfeit(&self, id: HandleId) {
        if self.lease.get() == Lease::Owned(id) {
            self.lease.set(Lease::Unowned);
        }
    }

    #[inline]
    fn base_ptr(&self) -> *const u8 {
        match &self.buf {
            Buf::Heap(cells) => cells.as_ptr().cast(),
            Buf::Static(bytes) => bytes.as_ptr(),
        }
    }

    /// Pointer to the byte at `offset`.
    ///
    /// `offset` must be at most [`capacity`](Self::capacity).
    #[inline]
    pub(crate) fn ptr_at(&self, offset: usize) -> *const u8 {
        debug_assert!(offset <= self.capacity());
        // SAFETY: within or one past the buffer per the assertion above
        unsafe { self.base_ptr().add(offset) }
    }

    /// Returns the `len` bytes starting at `offset`.
    #[inline]
    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[u8] {
        debug_assert!(offset.checked_add(len).is_some_and(|end| end <= self.capacity()));
        // SAFETY: in range, initialized (zeroed at allocation), and no live
        // mutation can overlap it per the module protocol
        unsafe { core::slice::from_raw_parts(self.ptr_at(offset), len) }
    }

    /// Copies `bytes` into the buffer at `offset`.
    ///
    /// # Safety
    ///
    /// The storage must be heap-backed with `offset + bytes.len()` within
    /// capacity, and no live reference may overlap the destination range.
    pub(crate) unsafe fn write(&self, offset: usize, bytes: &[u8]) {
        let Buf::Heap(cells) = &self.buf else {
            unreachable!("write to frozen storage");
        };
        debug_assert!(offset + bytes.len() <= cells.len());
        let dst = cells.as_ptr().wrapping_add(offset).cast::<u8>().cast_mut();
        // SAFETY: destination in range and disjoint from `bytes` (which the
        // caller could not borrow if it overlapped a writable range)
        unsafe { ptr::copy_nonoverlapping(bytes.as_ptr(), dst, bytes.len()) };
    }

    /// Sets the `len` bytes starting at `offset` to `byte`.
    ///
    /// # Safety
    ///
    /// Same contract as [`write`](Self::write).
    pub(crate) unsafe fn fill(&self, offset: usize, len: usize, byte: u8) {
        let Buf::Heap(cells) = &self.buf else {
            unreachable!("fill of frozen storage");
        };
        debug_assert!(offset + len <= cells.len());
        let dst = cells.as_ptr().wrapping_add(offset).cast::<u8>().cast_mut();
        // SAFETY: destination in range per the caller contract
        unsafe { ptr::write_bytes(dst, byte, len) };
    }

    /// Returns the window `[offset, offset + len)` as a mutable slice.
    ///
    /// # Safety
    ///
    /// The storage must be heap-backed with the range within capacity, and
    /// the caller must be the *only* handle referencing this storage,
    /// exclusively borrowed for the whole returned lifetime.
    pub(crate) unsafe fn window_mut(&self, offset: usize, len: usize) -> &mut [u8] {
        let Buf::Heap(cells) = &self.buf else {
            unreachable!("mutable window into frozen storage");
        };
        debug_assert!(offset + len <= cells.len());
        let start = cells.as_ptr().wrapping_add(offset).cast::<u8>().cast_mut();
        // SAFETY: in range, and exclusive per the caller contract
        unsafe { core::slice::from_raw_parts_mut(start, len) }
    }
}

/// Allocates a zeroed buffer of interior-mutable bytes.
fn zeroed(capacity: usize) -> Box<[UnsafeCell<u8>]> {
    let bytes: Box<[u8]> = vec![0; capacity].into_boxed_slice();
    // SAFETY: `UnsafeCell<u8>` is `repr(transparent)` over `u8`
    unsafe { Box::from_raw(Box::into_raw(bytes) as *mut [UnsafeCell<u8>]) }
}
