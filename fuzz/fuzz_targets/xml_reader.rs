#![no_main]
use libfuzzer_sys::fuzz_target;
use solxml::{from_bytes, to_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(root) = from_bytes(data) {
        // whatever was read and can be written must read back the same
        if let Ok(text) = to_string(&root) {
            let reparsed = solxml::from_str(&text);
            assert_eq!(reparsed.ok(), Some(root));
        }
    }
});
