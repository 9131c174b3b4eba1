#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use slnmerge::Solution;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing arbitrary text must never panic; whatever parses must
        // survive a merge and serialize back into parseable text.
        let Ok(solution) = Solution::from_text(Path::new("/fuzz/In.sln"), content) else {
            return;
        };
        if let Ok(merged) = Solution::merge_solutions("Out", Path::new("/fuzz"), &[&solution]) {
            let text = merged.solution.serialize();
            let _ = Solution::from_text(Path::new("/fuzz/Out.sln"), text);
        }
    }
});
