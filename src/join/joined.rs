//! The Joined type - an owned, NUL-terminated concatenation result.

use bytes::Bytes;
use std::fmt;
use std::ops::Deref;

/// An owned byte sequence produced by [`join`](crate::join).
///
/// The backing buffer always ends with a single `0` terminator which is not
/// part of the data: [`len`](Self::len) and [`as_bytes`](Self::as_bytes)
/// exclude it, [`as_bytes_with_nul`](Self::as_bytes_with_nul) includes it.
///
/// # Example
///
/// ```
/// use bytejoin::join;
///
/// let joined = join(Some(&b"Hello "[..]), Some(&b"World!"[..]))?;
///
/// assert_eq!(joined.len(), 12);
/// assert_eq!(joined.as_bytes(), b"Hello World!");
/// assert_eq!(joined.as_bytes_with_nul(), b"Hello World!\0");
/// # Ok::<(), bytejoin::JoinError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Joined {
    // data followed by the terminator
    buf: Bytes,
}

impl Joined {
    /// Wraps a buffer whose last byte is the terminator.
    pub(crate) fn from_terminated(buf: Vec<u8>) -> Self {
        debug_assert_eq!(buf.last(), Some(&0));
        Self { buf: Bytes::from(buf) }
    }

    /// Returns the data length, terminator excluded.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    /// Returns true if the joined data is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the data without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// Returns the data followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the result and returns the data without the terminator.
    ///
    /// This does not copy.
    pub fn into_bytes(self) -> Bytes {
        let len = self.len();
        self.buf.slice(..len)
    }

    /// Consumes the result and returns the full buffer, terminator included.
    pub fn into_bytes_with_nul(self) -> Bytes {
        self.buf
    }
}

impl Deref for Joined {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Joined {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for Joined {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for Joined {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Joined {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == other
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Joined {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.as_bytes() == *other
    }
}

impl From<Joined> for Bytes {
    fn from(joined: Joined) -> Self {
        joined.into_bytes()
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Joined({} bytes)", self.len())
    }
}
