#![no_main]

use libfuzzer_sys::fuzz_target;

use bundlehash::domain::value_objects::MountKey;
use bundlehash::MarkupGroups;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the chunk name, the rest is the template
    let (chunk, template) = text.split_once('\n').unwrap_or((text, ""));

    let mut groups = MarkupGroups::new();
    groups.push(MountKey::new("chunk", chunk, "js"), "<script></script>".to_string());

    let _ = bundlehash::render_template(template, &groups, "\n");
});
