#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Output of a successful transformation must itself be well-formed.
        if let Ok(t) = xinvoice::xr::Transformer::default().transform(s) {
            assert!(xinvoice::SourceDocument::parse(&t.xml).is_ok());
        }
    }
});
