#![no_main]

use bytejoin::{join, join_opt};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (s1, s2) = input;
    let (s1, s2) = (s1.as_slice(), s2.as_slice());

    let joined = join(Some(s1), Some(s2)).unwrap();

    // Verify: length is the sum of the inputs
    assert_eq!(joined.len(), s1.len() + s2.len());

    // Verify: content is s1 followed by s2
    assert_eq!(&joined[..s1.len()], s1);
    assert_eq!(&joined[s1.len()..], s2);

    // Verify: terminator present and excluded from the length
    let with_nul = joined.as_bytes_with_nul();
    assert_eq!(with_nul.len(), joined.len() + 1);
    assert_eq!(with_nul.last(), Some(&0));

    // Verify: determinism without aliasing
    let again = join(Some(s1), Some(s2)).unwrap();
    assert_eq!(joined, again);
    assert_ne!(
        joined.as_bytes_with_nul().as_ptr(),
        again.as_bytes_with_nul().as_ptr()
    );

    // Verify: absence is rejected on either side
    assert!(join_opt(None, Some(s2)).is_none());
    assert!(join_opt(Some(s1), None).is_none());
});
