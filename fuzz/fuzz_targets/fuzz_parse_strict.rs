#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let lenient = inikv::parse(s);
        // whatever strict mode accepts, lenient mode reads identically
        if let Ok(strict) = inikv::parse_strict(s) {
            assert_eq!(strict, lenient);
        }
    }
});
