#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(uri) = std::str::from_utf8(data) {
        // Accepted URIs always split into a non-empty user and host
        if let Ok((user, host)) = zeroops::domain::parse_target_uri(uri) {
            assert!(!user.is_empty());
            assert!(!host.is_empty());
            assert!(!user.contains('@') && !host.contains('@'));
        }
    }
});
