//! Two-way byte concatenation.
//!
//! - [`join`] - Concatenates two sequences into a fresh [`Joined`]
//! - [`join_opt`] - Same, collapsing any failure to `None`

mod joined;

pub use joined::Joined;

use crate::error::{JoinError, Side};

/// Concatenates `s1` and `s2` into a newly allocated, NUL-terminated buffer.
///
/// The result owns exactly one allocation of `s1.len() + s2.len() + 1`
/// bytes. Inputs are never modified.
///
/// # Errors
///
/// - [`JoinError::MissingInput`] if either argument is `None`. When both
///   are absent the first one is reported.
/// - [`JoinError::Alloc`] if the result buffer cannot be allocated.
///
/// # Example
///
/// ```
/// use bytejoin::{join, JoinError, Side};
///
/// let joined = join(Some(&b""[..]), Some(&b"World!"[..]))?;
/// assert_eq!(joined, b"World!");
///
/// let err = join(None, Some(&b"World!"[..])).unwrap_err();
/// assert!(matches!(err, JoinError::MissingInput { side: Side::First }));
/// # Ok::<(), JoinError>(())
/// ```
pub fn join(s1: Option<&[u8]>, s2: Option<&[u8]>) -> Result<Joined, JoinError> {
    let s1 = s1.ok_or(JoinError::MissingInput { side: Side::First })?;
    let s2 = s2.ok_or(JoinError::MissingInput { side: Side::Second })?;

    // saturates to usize::MAX, which try_reserve_exact rejects
    let total = s1.len().saturating_add(s2.len()).saturating_add(1);

    let mut buf = Vec::new();
    buf.try_reserve_exact(total)?;
    buf.extend_from_slice(s1);
    buf.extend_from_slice(s2);
    buf.push(0);

    Ok(Joined::from_terminated(buf))
}

/// Like [`join`], but returns `None` on any failure.
pub fn join_opt(s1: Option<&[u8]>, s2: Option<&[u8]>) -> Option<Joined> {
    join(s1, s2).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        let joined = join(Some(&b"Hello "[..]), Some(&b"World!"[..])).unwrap();
        assert_eq!(joined, b"Hello World!");
        assert_eq!(joined.as_bytes_with_nul(), b"Hello World!\0");
    }

    #[test]
    fn test_single_allocation() {
        let joined = join(Some(&b"abc"[..]), Some(&b"de"[..])).unwrap();
        let buf = joined.into_bytes_with_nul();
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.last(), Some(&0));
    }

    #[test]
    fn test_missing_second() {
        let err = join(Some(&b"Hello "[..]), None).unwrap_err();
        assert!(matches!(err, JoinError::MissingInput { side: Side::Second }));
    }

    #[test]
    fn test_both_missing_reports_first() {
        let err = join(None, None).unwrap_err();
        assert!(matches!(err, JoinError::MissingInput { side: Side::First }));
    }

    #[test]
    fn test_join_opt() {
        assert!(join_opt(None, Some(&b"x"[..])).is_none());
        assert_eq!(join_opt(Some(&b"x"[..]), Some(&b"y"[..])).unwrap(), b"xy");
    }
}
