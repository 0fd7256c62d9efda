//! Conversions to and from strands.
//!
//! All `From` constructions copy the source bytes into a fresh strand-owned
//! buffer (with a spare terminator slot) and claim its write lease; the
//! zero-copy way in is [`Strand::from_static`].

use std::borrow::Cow;

use crate::Strand;

impl From<&[u8]> for Strand {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self::copied_from(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Strand {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        Self::copied_from(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Strand {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Self::copied_from(&bytes)
    }
}

impl From<&str> for Strand {
    #[inline]
    fn from(s: &str) -> Self {
        Self::copied_from(s.as_bytes())
    }
}

impl From<String> for Strand {
    #[inline]
    fn from(s: String) -> Self {
        Self::copied_from(s.as_bytes())
    }
}

impl From<Vec<u8>> for Strand {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self::copied_from(&bytes)
    }
}

impl From<Box<[u8]>> for Strand {
    #[inline]
    fn from(bytes: Box<[u8]>) -> Self {
        Self::copied_from(&bytes)
    }
}

impl From<Cow<'_, [u8]>> for Strand {
    #[inline]
    fn from(bytes: Cow<'_, [u8]>) -> Self {
        Self::copied_from(&bytes)
    }
}

impl From<Strand> for Vec<u8> {
    #[inline]
    fn from(strand: Strand) -> Self {
        strand.as_slice().to_vec()
    }
}

impl AsRef<[u8]> for Strand {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl FromIterator<u8> for Strand {
    /// Collects bytes into a strand, growing through the normal doubling
    /// path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use strand::Strand;
    /// let s: Strand = (b'a'..=b'e').collect();
    /// assert_eq!(s, "abcde");
    /// ```
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut strand = Self::with_capacity(lower.saturating_add(1));
        for byte in iter {
            strand.push(byte);
        }
        strand
    }
}

impl<'a> FromIterator<&'a u8> for Strand {
    #[inline]
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<u8> for Strand {
    /// Appends every byte of the iterator, like repeated
    /// [`push`](Strand::push).
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len().saturating_add(lower));
        for byte in iter {
            self.push(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for Strand {
    #[inline]
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
