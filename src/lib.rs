//! bytejoin
//!
//! Concatenates two byte sequences into a fresh, owned, NUL-terminated buffer.
//!
//! The crate intentionally:
//! - does NOT interpret encodings (bytes in, bytes out)
//! - does NOT mutate its inputs
//! - does NOT join more than two sequences
//! - does NOT panic on absent input or allocation failure
//!
//! # Example
//!
//! ```
//! use bytejoin::{join, JoinError};
//!
//! fn main() -> Result<(), JoinError> {
//!     let joined = join(Some(&b"Hello "[..]), Some(&b"World!"[..]))?;
//!
//!     assert_eq!(joined.as_bytes(), b"Hello World!");
//!     assert_eq!(joined.as_bytes_with_nul().last(), Some(&0));
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod join;

pub use error::{JoinError, Side};
pub use join::{Joined, join, join_opt};
