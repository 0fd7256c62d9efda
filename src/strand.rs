//! Reference-counted, copy-on-write byte strings.

use core::cmp::{max, min};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Bound, Deref, RangeBounds};
use std::borrow::Borrow;
use std::rc::Rc;

use crate::seq::ByteSeq;
use crate::storage::{HandleId, Storage};

mod cmp;
mod convert;
mod search;

#[cfg(feature = "bstr")]
mod bstr;

#[cfg(feature = "serde")]
mod serde;


pub use search::Split;

/// A reference-counted, copy-on-write byte string.
///
/// A `Strand` is a cheap handle over a shared byte buffer: clones and
/// [`substr`](Self::substr) windows alias the same allocation instead of
/// copying it. Reads never copy. A write goes through in place only when the
/// writing handle is the *sole* referent of its buffer and holds (or can
/// claim) the buffer's write lease; otherwise the handle silently detaches
/// onto a private copy first. Bytes observed through one strand are therefore
/// never changed by writes through another.
///
/// Strings built from literals with [`from_static`](Self::from_static) wrap
/// the static bytes zero-copy; their storage is frozen and the first write
/// detaches.
///
/// Appending doubles the capacity when the buffer is outgrown, so repeated
/// pushes are amortized O(1).
///
/// `Strand` is single-threaded by design: it is neither [`Send`] nor
/// [`Sync`].
///
/// ```compile_fail
/// fn assert_send<T: Send>() {}
/// assert_send::<strand::Strand>();
/// ```
///
/// # Examples
///
/// Sharing and detaching:
///
/// ```
/// # use strand::Strand;
/// let first = Strand::from("share me");
/// let mut second = first.clone();
/// assert_eq!(first.references_count(), 2);
///
/// second.push_slice("!");
/// assert_eq!(first, "share me");           // untouched
/// assert_eq!(second, "share me!");
/// assert_eq!(first.references_count(), 1); // second detached
/// ```
///
/// Zero-copy substrings:
///
/// ```
/// # use strand::Strand;
/// let line = Strand::from("key=value");
/// let value = line.substr(4..);
/// assert_eq!(value, "value");
/// assert_eq!(line.references_count(), 2);
/// ```
pub struct Strand {
    storage: Rc<Storage>,
    offset: usize,
    len: usize,
    id: HandleId,
}

/// Error for a checked write at a position outside the logical window.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutOfBounds {
    index: usize,
    len: usize,
}

impl OutOfBounds {
    /// Offending index.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Length of the strand at the time of the access.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.len
    }
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for strand of length {}",
            self.index, self.len
        )
    }
}

impl core::error::Error for OutOfBounds {}

impl Strand {
    /// Creates an empty strand.
    ///
    /// No buffer is allocated until the first write.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::new();
    /// assert!(s.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty strand backed by a fresh buffer of exactly
    /// `capacity` bytes.
    ///
    /// Writes stay in place until the capacity is outgrown:
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::with_capacity(10);
    /// let ptr = s.as_ptr();
    /// for byte in 0..10 {
    ///     s.push(byte);
    /// }
    /// assert_eq!(s.as_ptr(), ptr);
    /// assert_eq!(s.capacity(), 10);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Storage::with_capacity(capacity),
            offset: 0,
            len: 0,
            id: HandleId::next(),
        }
    }

    /// Wraps static bytes without copying them.
    ///
    /// The storage is frozen: it can never be written in place, by this
    /// handle or any other. The first write detaches onto a private buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// static MOTD: &[u8] = b"hello";
    /// let mut s = Strand::from_static(MOTD);
    /// assert!(s.is_frozen());
    /// assert_eq!(s.as_ptr(), MOTD.as_ptr());
    ///
    /// s.push(b'!');
    /// assert!(!s.is_frozen());
    /// assert_eq!(s, b"hello!");
    /// ```
    #[inline]
    #[must_use]
    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            storage: Storage::frozen(bytes),
            offset: 0,
            len: bytes.len(),
            id: HandleId::next(),
        }
    }

    /// Copies `bytes` into a fresh buffer sized `len + 1` (one spare byte for
    /// a terminator) and claims its lease.
    pub(crate) fn copied_from(bytes: &[u8]) -> Self {
        let storage = Storage::with_capacity(bytes.len() + 1);
        // SAFETY: fresh storage, not yet shared, range within capacity
        unsafe { storage.write(0, bytes) };
        let id = HandleId::next();
        let claimed = storage.claim(id);
        debug_assert!(claimed);
        Self {
            storage,
            offset: 0,
            len: bytes.len(),
            id,
        }
    }

    /// Returns the length of the logical window in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the window is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the window as a byte slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.storage.slice(self.offset, self.len)
    }

    /// Returns a pointer to the first byte of the window.
    #[inline]
    #[must_use]
    pub fn as_ptr(&self) -> *const u8 {
        self.storage.ptr_at(self.offset)
    }

    /// Returns the byte at `index`, or `None` past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("abc");
    /// assert_eq!(s.get(1), Some(b'b'));
    /// assert_eq!(s.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }

    /// Returns the number of strands currently sharing this strand's buffer,
    /// this one included.
    #[inline]
    #[must_use]
    pub fn references_count(&self) -> usize {
        Rc::strong_count(&self.storage)
    }

    /// Returns `true` if the buffer wraps foreign bytes and can never be
    /// written in place.
    #[inline]
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.storage.is_frozen()
    }

    /// Returns `true` if this strand could write its buffer in place right
    /// now: it is the sole referent and the write lease is free or its own.
    ///
    /// Pure check; the lease is not acquired.
    #[inline]
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.is_unique() && self.storage.can_claim(self.id)
    }

    /// Returns the writable capacity as seen from this window's start, or
    /// just the length when the buffer cannot be written in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::with_capacity(16);
    /// assert_eq!(s.capacity(), 16);
    ///
    /// let shared = Strand::from("abc");
    /// let alias = shared.clone();
    /// assert_eq!(shared.capacity(), 3); // not writable while aliased
    /// drop(alias);
    /// assert_eq!(shared.capacity(), 4); // sole again: buffer plus terminator slot
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        if self.is_mutable() {
            self.storage.capacity() - self.offset
        } else {
            self.len
        }
    }

    #[inline]
    fn is_unique(&self) -> bool {
        Rc::strong_count(&self.storage) == 1
    }

    /// Returns `true` if an in-place write of up to `expected` bytes
    /// (counted from the window start) can proceed, claiming the lease as a
    /// side effect when it can be claimed.
    fn is_reserved(&self, expected: usize) -> bool {
        self.is_unique()
            && self.storage.claim(self.id)
            && self
                .offset
                .checked_add(expected)
                .is_some_and(|end| end <= self.storage.capacity())
    }

    /// Replaces the storage with a fresh private buffer of
    /// `max(len + 1, min_capacity)` bytes holding a copy of the window, and
    /// claims its lease. The old storage is released.
    fn detach(&mut self, min_capacity: usize) {
        let capacity = max(self.len + 1, min_capacity);
        let storage = Storage::with_capacity(capacity);
        // SAFETY: fresh storage, not yet shared, range within capacity
        unsafe { storage.write(0, self.as_slice()) };
        let claimed = storage.claim(self.id);
        debug_assert!(claimed);
        self.storage.forfeit(self.id);
        self.storage = storage;
        self.offset = 0;
    }

    /// Ensures this strand can write its buffer in place, detaching onto a
    /// private copy if it cannot. Idempotent.
    #[doc(alias = "make_mut")]
    pub fn make_mutable(&mut self) {
        if !self.is_reserved(self.len) {
            self.detach(self.len);
        }
    }

    /// Ensures `capacity() >= min_capacity`, detaching onto a larger private
    /// buffer when the current one is shared, frozen, leased elsewhere or
    /// simply too small.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("abc");
    /// s.reserve(100);
    /// assert!(s.capacity() >= 100);
    /// assert_eq!(s, "abc");
    /// ```
    pub fn reserve(&mut self, min_capacity: usize) {
        if !self.is_reserved(min_capacity) {
            self.detach(min_capacity);
        }
    }

    /// Returns the window as a mutable slice if an in-place write is
    /// permitted, claiming the lease; returns `None` when the buffer is
    /// shared or frozen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("abc");
    /// s.as_mut_slice().unwrap()[0] = b'A';
    /// assert_eq!(s, "Abc");
    ///
    /// let _alias = s.clone();
    /// assert!(s.as_mut_slice().is_none());
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> Option<&mut [u8]> {
        if self.is_reserved(self.len) {
            // SAFETY: sole referent per the check above, exclusively borrowed
            // for the returned lifetime through `&mut self`
            Some(unsafe { self.storage.window_mut(self.offset, self.len) })
        } else {
            None
        }
    }

    /// Returns the window as a mutable slice, detaching first if the buffer
    /// cannot be written in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let a = Strand::from("abc");
    /// let mut b = a.clone();
    /// b.to_mut_slice().make_ascii_uppercase();
    /// assert_eq!(a, "abc");
    /// assert_eq!(b, "ABC");
    /// ```
    #[inline]
    pub fn to_mut_slice(&mut self) -> &mut [u8] {
        self.make_mutable();
        // SAFETY: `make_mutable` leaves this handle sole referent of a
        // leased, writable buffer
        unsafe { self.storage.window_mut(self.offset, self.len) }
    }

    /// Appends one byte.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("ab");
    /// s.push(b'c');
    /// assert_eq!(s, "abc");
    /// ```
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.push_bytes(&[byte]);
    }

    /// Appends a byte sequence.
    ///
    /// When the buffer is shared, frozen, leased by another handle or too
    /// small, the strand detaches onto a private buffer of twice the new
    /// length, making repeated appends amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("abc");
    /// s.push_slice("def");
    /// s.push_slice(b"!");
    /// assert_eq!(s, "abcdef!");
    /// ```
    #[doc(alias = "append")]
    #[doc(alias = "extend_from_slice")]
    #[inline]
    pub fn push_slice(&mut self, addition: impl ByteSeq) {
        self.push_bytes(addition.as_slice());
    }

    fn push_bytes(&mut self, bytes: &[u8]) {
        let new_len = self.len + bytes.len();
        if !self.is_reserved(new_len) {
            self.detach(new_len.saturating_mul(2));
        }
        // SAFETY: sole leased buffer with room (ensured above); the
        // destination starts past every live window borrow
        unsafe { self.storage.write(self.offset + self.len, bytes) };
        self.len = new_len;
    }

    /// Removes and returns the last byte of the window, or `None` if empty.
    ///
    /// Never touches the buffer: only this handle's window shrinks.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("ab");
    /// assert_eq!(s.pop(), Some(b'b'));
    /// assert_eq!(s.pop(), Some(b'a'));
    /// assert_eq!(s.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        let byte = self.as_slice()[self.len - 1];
        self.len -= 1;
        Some(byte)
    }

    /// Empties the window. The buffer is untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Resizes the window to `new_len`, filling any new bytes with `filler`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("ab");
    /// s.resize(4, b'x');
    /// assert_eq!(s, "abxx");
    /// s.resize(1, b'x');
    /// assert_eq!(s, "a");
    /// ```
    pub fn resize(&mut self, new_len: usize, filler: u8) {
        self.reserve(new_len);
        if new_len > self.len {
            // SAFETY: `reserve` left this handle sole referent of a leased
            // buffer with room through `new_len`
            unsafe {
                self.storage
                    .fill(self.offset + self.len, new_len - self.len, filler);
            }
        }
        self.len = new_len;
    }

    /// Writes `byte` at `index`, detaching first if the buffer cannot be
    /// written in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let shared = Strand::from("abc");
    /// let mut changed = shared.clone();
    /// changed.set(0, b'A');
    /// assert_eq!(shared, "abc");
    /// assert_eq!(changed, "Abc");
    /// ```
    #[inline]
    #[track_caller]
    pub fn set(&mut self, index: usize, byte: u8) {
        match self.try_set(index, byte) {
            Ok(()) => {}
            Err(err) => panic!("{err}"),
        }
    }

    /// Writes `byte` at `index`, detaching first if the buffer cannot be
    /// written in place.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfBounds`] error if `index` is past the end; nothing
    /// is written and no detach happens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("abc");
    /// assert!(s.try_set(2, b'C').is_ok());
    /// assert_eq!(s, "abC");
    ///
    /// let err = s.try_set(3, b'!').unwrap_err();
    /// assert_eq!(err.index(), 3);
    /// assert_eq!(err.length(), 3);
    /// ```
    pub fn try_set(&mut self, index: usize, byte: u8) -> Result<(), OutOfBounds> {
        if index >= self.len {
            return Err(OutOfBounds {
                index,
                len: self.len,
            });
        }
        self.make_mutable();
        // SAFETY: in window; `make_mutable` leaves this handle sole referent
        // of a leased buffer
        unsafe { self.storage.write(self.offset + index, &[byte]) };
        Ok(())
    }

    /// Makes sure the byte just past the window is `0` and returns the
    /// window plus that terminator (`len() + 1` bytes). The length is
    /// unchanged.
    ///
    /// Zero-copy whenever the following byte already is an in-range zero;
    /// freshly detached buffers are zero-filled, so this is the common case.
    /// Otherwise a single `0` is appended through the normal write path,
    /// detaching if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let mut s = Strand::from("abc");
    /// assert_eq!(s.ensure_terminated(), b"abc\0");
    /// assert_eq!(s.len(), 3);
    ///
    /// // frozen literals without a trailing zero detach
    /// let mut frozen = Strand::from_static(b"abc");
    /// assert_eq!(frozen.ensure_terminated(), b"abc\0");
    /// assert!(!frozen.is_frozen());
    /// ```
    #[doc(alias = "c_str")]
    pub fn ensure_terminated(&mut self) -> &[u8] {
        let following = self.offset + self.len;
        let terminated =
            following < self.storage.capacity() && self.storage.slice(following, 1)[0] == 0;
        if !terminated {
            self.push(0);
            self.len -= 1;
        }
        self.storage.slice(self.offset, self.len + 1)
    }

    /// Returns a new strand over a sub-window of this one, sharing the same
    /// buffer.
    ///
    /// The bounds are clamped to the window: positions past the end are
    /// pulled back and an inverted range yields an empty strand, so any
    /// range is acceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s = Strand::from("0123456789");
    /// assert_eq!(s.substr(2..5), "234");
    /// assert_eq!(s.substr(8..), "89");
    /// assert_eq!(s.substr(..=1), "01");
    /// assert_eq!(s.substr(2..3000), "23456789");
    /// assert_eq!(s.substr(999..), "");
    /// assert_eq!(s.references_count(), 1); // all temporaries dropped
    /// ```
    #[must_use]
    pub fn substr(&self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&index) => index,
            Bound::Excluded(&index) => index.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&index) => index.saturating_add(1),
            Bound::Excluded(&index) => index,
            Bound::Unbounded => self.len,
        };
        let start = min(start, self.len);
        let end = max(min(end, self.len), start);
        self.alias(start, end)
    }

    /// Aliasing sub-window over `[start, end)`, both in range.
    pub(crate) fn alias(&self, start: usize, end: usize) -> Self {
        debug_assert!(start <= end && end <= self.len);
        Self {
            storage: Rc::clone(&self.storage),
            offset: self.offset + start,
            len: end - start,
            id: HandleId::next(),
        }
    }

    /// Concatenation used by `Add`: writes into this strand's spare capacity
    /// when it is sole referent with room, otherwise builds a fresh
    /// exact-size buffer.
    fn concat_with(&self, other: &[u8]) -> Self {
        let total = self.len + other.len();
        if self.is_reserved(total) {
            // SAFETY: sole leased buffer with room; the destination lies past
            // every live window borrow
            unsafe { self.storage.write(self.offset + self.len, other) };
            return Self {
                storage: Rc::clone(&self.storage),
                offset: self.offset,
                len: total,
                id: HandleId::next(),
            };
        }
        let storage = Storage::with_capacity(total);
        // SAFETY: fresh storage, not yet shared, both ranges within capacity
        unsafe {
            storage.write(0, self.as_slice());
            storage.write(self.len, other);
        }
        let id = HandleId::next();
        let claimed = storage.claim(id);
        debug_assert!(claimed);
        Self {
            storage,
            offset: 0,
            len: total,
            id,
        }
    }
}

impl Clone for Strand {
    /// Shares the buffer. The clone draws a fresh identity and never
    /// inherits the write lease.
    #[inline]
    fn clone(&self) -> Self {
        Self {
            storage: Rc::clone(&self.storage),
            offset: self.offset,
            len: self.len,
            id: HandleId::next(),
        }
    }
}

impl Drop for Strand {
    #[inline]
    fn drop(&mut self) {
        self.storage.forfeit(self.id);
    }
}

impl Default for Strand {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Strand {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Borrow<[u8]> for Strand {
    #[inline]
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Hash for Strand {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Strand {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl ByteSeq for Strand {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        Self::as_slice(self)
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T: ByteSeq + ?Sized> Add<&T> for &Strand {
    type Output = Strand;

    /// Concatenates without consuming either operand.
    ///
    /// Reuses the left operand's spare capacity when it is sole referent
    /// with room; the result then shares its buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let a = Strand::from("ab");
    /// let b = Strand::from("cd");
    /// assert_eq!(&a + &b, "abcd");
    /// assert_eq!(&a + "!", "ab!");
    /// ```
    #[inline]
    fn add(self, rhs: &T) -> Strand {
        self.concat_with(rhs.as_slice())
    }
}

impl<T: ByteSeq + ?Sized> Add<&T> for Strand {
    type Output = Strand;

    /// Appends to the consumed left operand, keeping its buffer when
    /// possible.
    #[inline]
    fn add(mut self, rhs: &T) -> Strand {
        self.push_slice(rhs);
        self
    }
}

impl<T: ByteSeq + ?Sized> AddAssign<&T> for Strand {
    #[inline]
    fn add_assign(&mut self, rhs: &T) {
        self.push_slice(rhs);
    }
}
