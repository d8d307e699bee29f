#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz env file parsing - this should never panic
        let env = zeroops::EnvMapping::parse(content);
        for (key, value) in env.as_map() {
            assert_eq!(key.trim(), key);
            assert_eq!(value.trim(), value);
        }
    }
});
