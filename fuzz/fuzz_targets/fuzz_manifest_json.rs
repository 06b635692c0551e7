#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Stats parsing and grouping should never panic
    if let Ok(manifest) = serde_json::from_slice::<bundlehash::AssetManifest>(data) {
        let _ = bundlehash::group_assets(
            &manifest,
            "chunk",
            &bundlehash::infrastructure::builtin_helpers(),
        );
    }
});
