#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let doc = inikv::parse(s);
        let text = doc.to_string();
        match inikv::parse_strict(&text) {
            Ok(reparsed) => assert_eq!(reparsed, doc, "roundtrip mismatch for:\n{}", text),
            Err(e) => panic!("serialized output rejected: {}\n{}", e, text),
        }
    }
});
