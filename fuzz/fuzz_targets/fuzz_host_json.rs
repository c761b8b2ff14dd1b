#![no_main]

use lasso_web::{HostConfig, LassoHost};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut host = LassoHost::new(HostConfig::default());
    // Each line is one host event; malformed lines must be rejected, never panic.
    for line in text.lines() {
        let before = host.state();
        let pending = host.tracker().handler().len();
        match host.dispatch_json(line) {
            Ok(out) => assert!(out.pending_selections <= pending + 1),
            Err(_) => assert_eq!(host.state(), before, "rejected input changed state"),
        }
    }
    let _ = host.drain_selections_json();
});
