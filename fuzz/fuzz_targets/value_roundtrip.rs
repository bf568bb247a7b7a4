#![no_main]
use libfuzzer_sys::fuzz_target;
use solxml::{read_value, to_xml_string};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(value) = read_value(s) {
            if let Ok(xml) = to_xml_string(&value) {
                let _ = read_value(&xml);
            }
        }
    }
});
