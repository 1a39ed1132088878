//! Basic join example.
//!
//! Run with:
//!     cargo run --example join_basic

use bytejoin::{JoinError, join};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let pairs: [(Option<&[u8]>, Option<&[u8]>); 4] = [
        (Some(&b"Hello "[..]), Some(&b"World!"[..])),
        (Some(&b""[..]), Some(&b"World!"[..])),
        (Some(&b"Hello "[..]), None),
        (None, Some(&b"World!"[..])),
    ];

    for (s1, s2) in pairs {
        match join(s1, s2) {
            Ok(joined) => println!(
                "{} -> {:?}",
                joined,
                String::from_utf8_lossy(joined.as_bytes())
            ),
            Err(e @ JoinError::MissingInput { .. }) => println!("skipped: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
