#![no_main]

use libfuzzer_sys::fuzz_target;

use pacecalc_core::{format_clock, parse_clock, parse_field, TargetTime};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // Lenient field parsing never panics, whatever the input.
    let _ = TargetTime::new(parse_field(input), parse_field(input), 0).total_seconds();

    // Anything the strict parser accepts survives a format round trip
    // while it stays exactly representable as f64.
    if let Ok(secs) = parse_clock(input) {
        if secs < (1u64 << 52) {
            let formatted = format_clock(secs as f64);
            assert_eq!(parse_clock(&formatted).ok(), Some(secs), "{input:?}");
        }
    }
});
