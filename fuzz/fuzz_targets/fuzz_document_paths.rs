#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Errors are fine, panics are bugs.
        if let Ok(doc) = xinvoice::SourceDocument::parse(s) {
            let paths = xinvoice::xr::all_paths(&doc);
            assert!(paths.len() >= doc.len());
        }
    }
});
